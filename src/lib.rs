//! Trailhead - Trainee Progress & Gamification Engine
//!
//! This crate folds sub-module completions and quiz submissions into
//! per-(trainee, module) progress ledger entries, awards badges for
//! cross-cutting completion conditions, and computes a points leaderboard.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
