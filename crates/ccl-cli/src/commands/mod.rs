// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

pub mod config;
pub mod inspect;
pub mod prove;
pub mod setup;
pub mod verify;
