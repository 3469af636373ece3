use crate::NewsRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Search box only; shown until a search succeeds.
    #[default]
    Landing,
    /// Results shell with keyword sidebar and article list.
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub keywords: Vec<String>,
    pub results: Vec<NewsRecord>,
    /// Loading indicator drawn over the results shell while a search is in flight.
    pub loading_overlay: bool,
    pub is_transitioning: bool,
    pub error: Option<String>,
    /// Remount token for the results scope; changes on every reset.
    pub provider_key: u64,
    pub should_quit: bool,
}
