// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod support;
pub mod admin_tests;
pub mod snapshot_tests;
pub mod property_tests;
