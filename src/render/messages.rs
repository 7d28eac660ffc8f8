//! User-visible strings.

/// Timeline page could not load its data.
pub const INDEX_LOAD_ERROR: &str =
    "Não foi possível carregar o conteúdo. Tente novamente mais tarde.";

/// Article page could not load its data.
pub const ARTICLE_LOAD_ERROR: &str =
    "Não foi possível carregar o conteúdo do Skate Terapia. Tente recarregar a página.";

/// Maneuver page could not load its data.
pub const MANEUVER_LOAD_ERROR: &str = "Erro ao carregar.";

/// Maneuver id missing or unknown.
pub const MANEUVER_NOT_FOUND: &str = "Manobra não encontrada.";

/// Search matched nothing.
pub const SEARCH_NOT_FOUND: &str =
    "Busca não encontrada. Tente um ano (ex: 1970), uma manobra da lista ou \"skate terapia\".";

pub const BACK_TO_TIMELINE: &str = "Voltar para a Timeline";
pub const BACK_TO_TIMELINE_ARROW: &str = "← Voltar para a Timeline";
pub const CREATOR_LABEL: &str = "Criador:";
