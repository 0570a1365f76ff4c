//! Multimodal metro route planner.
//!
//! A web service that answers: "Which metro stations should I use to get
//! from here to there, and should I just take a taxi instead?"

pub mod config;
pub mod directions;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
