// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod collaborators;
pub mod service;
pub mod persistence;
pub mod script;
