//! Game catalog ingestion and similarity recommendations.
//!
//! Titles are looked up against the IGDB catalog, matched, and flattened into canonical
//! records. Assembled corpora can be remapped onto shared vocabularies, and precomputed
//! feature scores drive nearest-neighbour recommendations.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod vocabulary;
