// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # ccl-sdk
//!
//! Everything a lending backend needs to turn a borrow request into a
//! verifiable eligibility proof: artifact loading, a shared proving context,
//! cancellable proof tasks, and a service that wires the profile store and
//! the ledger around them.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | [`artifacts`] | Versioned circuit/key files with fail-fast header checks |
//! | [`context`] | `ProofContext` (prove + verify) and `VerifierContext` |
//! | [`task`] | Proving on the blocking pool with timeout and cancellation |
//! | [`ports`] | `ProfileSource` and `LedgerSink` collaborator traits |
//! | [`adapters`] | In-memory implementations of the ports |
//! | [`service`] | `EligibilityService`: snapshot, prove, self-check, attach |
//! | [`serialize`] | Proof JSON envelope with EVM calldata |
//! | [`config`] | `~/.ccl/config.json` |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ccl_sdk::{config, ProofContext, ProofTask};
//! # async fn example(request: ccl_types::EligibilityRequest) -> Result<(), ccl_sdk::EligibilityError> {
//! let cfg = config::load()?;
//! let ctx = Arc::new(ProofContext::load(&cfg.artifact_paths())?);
//! let proof = ProofTask::spawn(ctx.clone(), request)
//!     .wait(cfg.prove_timeout())
//!     .await?;
//! assert!(ctx.verify(&proof)?);
//! println!("score = {}", proof.score());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod artifacts;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod proof;
pub mod serialize;
pub mod service;
pub mod task;

pub use ccl_circuit::{EligibilityCircuit, PublicSignals};
pub use ccl_types::{BorrowerStats, Decimal, EligibilityRequest, LenderStats, Thresholds};

pub use artifacts::{ArtifactError, ArtifactKind, ArtifactPaths};
pub use config::{ConfigError, SdkConfig};
pub use context::{ProofContext, VerifierContext};
pub use error::{EligibilityError, EligibilityResult};
pub use proof::EligibilityProof;
pub use serialize::ProofEnvelope;
pub use service::EligibilityService;
pub use task::{AbortSignal, ProofTask};
