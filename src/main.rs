// ============================================================================
// SnappQuest - Client terminal
// ============================================================================
// Programme TUI : leaderboard, recherche de solde et profil de quêtes.
// Les données viennent du proxy /api/sheets (binaire snappquest-proxy).
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle infinie qui gère événements et rendering
// 3. Async dans sync : worker thread avec son propre runtime tokio
// 4. Arc<Mutex<App>> : état partagé entre l'UI et le worker
// ============================================================================

use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use snappquest::api::ProxyClient;
use snappquest::app::{App, InputTarget, Screen};
use snappquest::config::{load_dotenv, ColumnConfig, Config};
use snappquest::models::{BalanceRecord, Leaderboard};
use snappquest::quests::InMemoryQuestRepository;
use snappquest::service::{check_balance, load_leaderboard};
use snappquest::ui::events::{action_for, input_action_for, Action, Event, EventHandler, InputAction};
use snappquest::ui::render;

// ============================================================================
// AppCommand / AppResult : messages du worker thread
// ============================================================================
// CONCEPT RUST : Command pattern avec channels
// - L'event loop envoie des commandes au worker thread
// - Le worker exécute les fetchs (async) et renvoie les résultats
// - Les résultats sont appliqués dans l'ordre d'arrivée : le dernier gagne
// ============================================================================

/// Commandes envoyées au worker thread
#[derive(Debug, Clone)]
enum AppCommand {
    /// Recharger la feuille et recalculer le classement
    LoadLeaderboard,

    /// Recharger la feuille et chercher la ligne d'un utilisateur
    LookupBalance { username: String },
}

/// Résultats renvoyés par le worker thread
#[derive(Debug)]
enum AppResult {
    LeaderboardLoaded(Option<Leaderboard>),
    LeaderboardError(String),
    BalanceLoaded(BalanceRecord),
    BalanceError(String),
}

/// Ce dont le worker a besoin pour appeler le proxy
struct WorkerContext {
    client: ProxyClient,
    range: String,
    columns: ColumnConfig,
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les println! ne fonctionnent pas une fois le TUI lancé : on log vers un
// fichier avec rotation quotidienne.
// ============================================================================

/// Répertoire des logs
///
/// - Linux : ~/.local/share/snappquest/logs
/// - macOS : ~/Library/Application Support/snappquest/logs
/// - Windows : C:\Users\<user>\AppData\Local\snappquest\logs
/// - ./logs si le répertoire de données est introuvable
fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("snappquest").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialise le système de logging vers fichier
///
/// ```bash
/// tail -f ~/.local/share/snappquest/logs/snappquest.log
/// RUST_LOG=snappquest=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "snappquest.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true) // Utile pour distinguer UI et worker
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour snappquest, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snappquest=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

/// Verrouille l'état partagé, même si un autre thread a paniqué avec le lock
fn lock_app(app: &Mutex<App>) -> MutexGuard<'_, App> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    load_dotenv();

    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("SnappQuest starting up");
    let config = Config::load().context("Configuration invalide")?;

    let context = WorkerContext {
        client: ProxyClient::new(config.proxy_url.clone()),
        range: config.default_range.clone(),
        columns: config.columns.clone(),
    };
    info!(proxy = %context.client.endpoint(), range = %context.range, "Using sheets proxy");

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let app = Arc::new(Mutex::new(App::with_repository(
        Box::new(InMemoryQuestRepository::with_sample_quests()),
        config.currency_symbol.clone(),
    )));

    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    let (result_tx, result_rx) = mpsc::channel::<AppResult>();

    info!("Spawning background worker thread");
    spawn_background_worker(context, command_rx, result_tx, app.clone());

    // Premier chargement du classement (écran de démarrage)
    let _ = command_tx.send(AppCommand::LoadLeaderboard);

    let events = EventHandler::new();

    info!("Starting event loop");
    let result = run(&mut terminal, app, &events, command_tx, result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Background Worker Thread
// ============================================================================
// CONCEPT RUST : Thread + async runtime
// - std::thread::spawn() : crée un thread OS
// - tokio::runtime::Runtime : runtime async dans ce thread
// - block_on() bloque le worker, pas l'UI
// ============================================================================

fn spawn_background_worker(
    context: WorkerContext,
    command_rx: mpsc::Receiver<AppCommand>,
    result_tx: mpsc::Sender<AppResult>,
    app: Arc<Mutex<App>>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(error = %e, "Failed to create tokio runtime, worker exiting");
                return;
            }
        };

        // Boucle de traitement : se termine quand le channel est fermé
        while let Ok(command) = command_rx.recv() {
            info!(?command, "Worker received command");

            let message = match &command {
                AppCommand::LoadLeaderboard => "Chargement du leaderboard...".to_string(),
                AppCommand::LookupBalance { username } => format!("Recherche du solde de {}...", username),
            };
            lock_app(&app).start_loading(Some(message));

            let result = match command {
                AppCommand::LoadLeaderboard => {
                    match runtime.block_on(load_leaderboard(&context.client, &context.range, &context.columns)) {
                        Ok(leaderboard) => AppResult::LeaderboardLoaded(leaderboard),
                        Err(e) => {
                            error!(error = ?e, "Failed to load leaderboard");
                            AppResult::LeaderboardError(format!("{:#}", e))
                        }
                    }
                }
                AppCommand::LookupBalance { username } => {
                    match runtime.block_on(check_balance(
                        &context.client,
                        &context.range,
                        &username,
                        &context.columns,
                    )) {
                        Ok(record) => AppResult::BalanceLoaded(record),
                        Err(e) => {
                            error!(username = %username, error = ?e, "Balance lookup failed");
                            AppResult::BalanceError(format!("{:#}", e))
                        }
                    }
                }
            };

            let _ = result_tx.send(result);
            lock_app(&app).stop_loading();
        }

        info!("Worker thread exiting (channel closed)");
    });
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   0. Appliquer les résultats du worker
//   1. Dessiner l'interface
//   2. Traiter les événements
//   3. Mettre à jour l'état (tick)
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    events: &EventHandler,
    command_tx: mpsc::Sender<AppCommand>,
    result_rx: mpsc::Receiver<AppResult>,
) -> Result<()> {
    loop {
        if !lock_app(&app).is_running() {
            break;
        }

        // 0. RÉSULTATS : try_recv ne bloque pas
        loop {
            match result_rx.try_recv() {
                Ok(result) => apply_result(&mut lock_app(&app), result),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    error!("Worker thread disconnected!");
                    break;
                }
            }
        }

        // 1. RENDER
        terminal.draw(|frame| {
            let app_lock = lock_app(&app);
            render(frame, &app_lock);
        })?;

        // 2. INPUT
        if let Ok(event) = events.next() {
            handle_event(&mut lock_app(&app), event, &command_tx);
        }

        // 3. UPDATE
        lock_app(&app).tick();
    }

    Ok(())
}

/// Applique un résultat du worker à l'état de l'application
fn apply_result(app: &mut App, result: AppResult) {
    match result {
        AppResult::LeaderboardLoaded(leaderboard) => {
            info!(
                entries = leaderboard.as_ref().map(|l| l.len()).unwrap_or(0),
                "Updating leaderboard"
            );
            app.set_leaderboard(leaderboard);
        }
        AppResult::LeaderboardError(error) => app.set_leaderboard_error(error),
        AppResult::BalanceLoaded(record) => app.set_balance(record),
        AppResult::BalanceError(error) => app.set_balance_error(error),
    }
}

// ============================================================================
// Gestion des événements
// ============================================================================
// CONCEPT RUST : Pattern matching avec guards
// - Le mode input capture toutes les touches en premier
// - Puis les raccourcis globaux, puis ceux de l'écran courant
// ============================================================================

fn handle_event(app: &mut App, event: Event, command_tx: &mpsc::Sender<AppCommand>) {
    // ========================================
    // Input Mode : username ou champs de quête
    // ========================================
    if app.is_in_input_mode() {
        match input_action_for(&event) {
            Some(InputAction::Cancel) => {
                info!(target = ?app.input_target, "User cancelled input");
                app.cancel_input();
            }
            Some(InputAction::Submit) => {
                let target = app.input_target;
                let value = app.submit_input();
                if target == InputTarget::Username {
                    submit_username(app, value.trim(), command_tx);
                } else {
                    app.advance_quest_creation(target, value.trim());
                }
            }
            Some(InputAction::Backspace) => app.backspace(),
            Some(InputAction::Insert(c)) => app.append_char(c),
            None => {}
        }
        return;
    }

    let Some(action) = action_for(&event) else {
        // Tick : rien à faire ; autre touche : annule la confirmation de quit
        if matches!(event, Event::Key(_)) {
            app.cancel_quit();
        }
        return;
    };

    if action != Action::Quit {
        app.cancel_quit();
    }

    let on_quests = app.is_on(Screen::Quests);
    match action {
        Action::Quit => {
            // Two-step quit pour éviter les sorties accidentelles
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        // ESC / Espace : ferme le message de quête
        Action::Dismiss => app.dismiss_quest_message(),

        Action::NextScreen => {
            app.next_screen();
            debug!(screen = ?app.current_screen, "User switched screen");
        }

        Action::SearchBalance => {
            info!("User requested balance lookup");
            app.start_input(InputTarget::Username);
        }

        // 'r' : recharge le classement, ou relance la dernière recherche de solde
        Action::Reload => match app.current_screen {
            Screen::Leaderboard => {
                info!("User requested leaderboard reload");
                let _ = command_tx.send(AppCommand::LoadLeaderboard);
            }
            Screen::Balance => {
                if let Some(username) = app.balance_query.clone() {
                    info!(username = %username, "User requested balance refresh");
                    submit_username(app, &username, command_tx);
                }
            }
            _ => {}
        },

        Action::Up => app.navigate_up(),
        Action::Down => app.navigate_down(),

        Action::CompleteQuest if on_quests => {
            if let Some(quest) = app.selected_quest() {
                info!(id = quest.id, title = %quest.title, "User completed quest");
            }
            app.complete_selected_quest();
        }
        Action::NewQuest if on_quests => {
            info!("User started quest creation");
            app.start_quest_creation();
        }
        Action::ShowSummary if on_quests => app.show_selected_summary(),
        Action::PreviousPage if on_quests => app.previous_quest_page(),
        Action::NextPage if on_quests => app.next_quest_page(),
        Action::PreviousCompletedPage if on_quests => app.previous_completed_page(),
        Action::NextCompletedPage if on_quests => app.next_completed_page(),

        // Raccourcis de l'écran Quests ailleurs : ignorés
        _ => {}
    }
}

/// Lance une recherche de solde (un username vide est ignoré)
fn submit_username(app: &mut App, username: &str, command_tx: &mpsc::Sender<AppCommand>) {
    if username.is_empty() {
        debug!("Empty username, ignoring");
        return;
    }

    info!(username = %username, "User submitted balance lookup");
    app.begin_balance_lookup(username);
    let _ = command_tx.send(AppCommand::LookupBalance {
        username: username.to_string(),
    });
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
