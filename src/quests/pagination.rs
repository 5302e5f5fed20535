/// Nombre de quêtes affichées par page dans le profil
pub const QUESTS_PER_PAGE: usize = 4;

/// Retourne la page `page` (numérotée à partir de 1) de `items`
///
/// Une page hors limites (ou `page == 0`, ou `per_page == 0`) donne une slice vide.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Nombre de pages pour `len` éléments (au moins 1, même pour une liste vide)
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}
