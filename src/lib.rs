//! AHP Engine - Analytic Hierarchy Process for multi-criteria decisions
//!
//! This crate derives criteria weights, alternative scores, a ranking, and a
//! consistency verdict from pairwise judgments, with model persistence and a
//! small CLI around the pure numeric core.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
