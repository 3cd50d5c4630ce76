//! Targeting-based advertisement selection.
//!
//! [`selection::logic::AdvertisementSelectionLogic`] scans the candidate
//! content of a marketplace in store order and returns the first one with a
//! satisfied [`targeting::group::TargetingGroup`], or
//! [`model::advertisement::GeneratedAdvertisement::Empty`].

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod dao;
pub mod logging;
pub mod model;
pub mod selection;
pub mod targeting;

use selection::logic::AdvertisementSelectionLogic;

#[derive(Clone)]
pub struct AppState {
    pub selection_logic: Arc<AdvertisementSelectionLogic>,
}

impl AppState {
    pub fn new(selection_logic: AdvertisementSelectionLogic) -> Self {
        Self {
            selection_logic: Arc::new(selection_logic),
        }
    }
}
