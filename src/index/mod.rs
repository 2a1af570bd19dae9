// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod volunteer;

pub use volunteer::VolunteerIndex;
