// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Versioned artifact files for the circuit and its Groth16 keys.
//!
//! Every file starts with a fixed header:
//!
//! ```text
//! magic    "CCLA"          4 bytes
//! format   u16 BE          2 bytes
//! kind     u8              1 byte   (1 circuit, 2 proving key, 3 verification key)
//! layout   u16 BE          2 bytes
//! digest   SHA-256         32 bytes (circuit digest the payload belongs to)
//! payload  arkworks compressed serialization
//! ```
//!
//! Reading checks the header against the compiled circuit before touching
//! the payload, so a key from another circuit revision fails immediately
//! rather than producing proofs that never verify.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ccl_circuit::EligibilityCircuit;
use ccl_groth16::{ProvingKey, VerificationKey};

pub const MAGIC: [u8; 4] = *b"CCLA";
pub const FORMAT_VERSION: u16 = 1;
pub const HEADER_LEN: usize = 4 + 2 + 1 + 2 + 32;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("{0} not found (run `ccl setup` first)")]
    Missing(PathBuf),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("not a ccl artifact")]
    BadMagic,
    #[error("unsupported artifact format {0}")]
    UnsupportedFormat(u16),
    #[error("expected {expected:?} artifact, found kind {found}")]
    WrongKind { expected: ArtifactKind, found: u8 },
    #[error("artifact built for layout {found}, this build uses layout {expected}")]
    LayoutMismatch { expected: u16, found: u16 },
    #[error("artifact belongs to a different circuit")]
    CircuitMismatch,
    #[error("proving and verification keys are from different setups")]
    KeyMismatch,
    #[error("unexpected bytes after the payload")]
    TrailingBytes,
    #[error("serialization: {0}")]
    Serialization(String),
}

impl From<ark_serialize::SerializationError> for ArtifactError {
    fn from(err: ark_serialize::SerializationError) -> Self {
        match err {
            ark_serialize::SerializationError::IoError(e) => Self::Io(e),
            other => Self::Serialization(other.to_string()),
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Circuit = 1,
    ProvingKey = 2,
    VerificationKey = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtifactHeader {
    pub kind: ArtifactKind,
    pub layout_version: u16,
    pub circuit_digest: [u8; 32],
}

impl ArtifactHeader {
    pub fn for_circuit(kind: ArtifactKind, circuit: &EligibilityCircuit) -> Self {
        Self {
            kind,
            layout_version: circuit.layout_version(),
            circuit_digest: circuit.digest(),
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..4].copy_from_slice(&MAGIC);
        out[4..6].copy_from_slice(&FORMAT_VERSION.to_be_bytes());
        out[6] = self.kind as u8;
        out[7..9].copy_from_slice(&self.layout_version.to_be_bytes());
        out[9..].copy_from_slice(&self.circuit_digest);
        out
    }

    /// Parse and check a header against what `circuit` expects for `kind`.
    pub fn check(
        bytes: &[u8; HEADER_LEN],
        kind: ArtifactKind,
        circuit: &EligibilityCircuit,
    ) -> Result<Self, ArtifactError> {
        if bytes[..4] != MAGIC {
            return Err(ArtifactError::BadMagic);
        }
        let format = u16::from_be_bytes([bytes[4], bytes[5]]);
        if format != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedFormat(format));
        }
        if bytes[6] != kind as u8 {
            return Err(ArtifactError::WrongKind {
                expected: kind,
                found: bytes[6],
            });
        }
        let layout_version = u16::from_be_bytes([bytes[7], bytes[8]]);
        if layout_version != circuit.layout_version() {
            return Err(ArtifactError::LayoutMismatch {
                expected: circuit.layout_version(),
                found: layout_version,
            });
        }
        let mut circuit_digest = [0u8; 32];
        circuit_digest.copy_from_slice(&bytes[9..]);
        if circuit_digest != circuit.digest() {
            return Err(ArtifactError::CircuitMismatch);
        }
        Ok(Self {
            kind,
            layout_version,
            circuit_digest,
        })
    }
}

pub fn write_artifact<W: Write, T: CanonicalSerialize>(
    mut writer: W,
    kind: ArtifactKind,
    circuit: &EligibilityCircuit,
    payload: &T,
) -> Result<(), ArtifactError> {
    writer.write_all(&ArtifactHeader::for_circuit(kind, circuit).to_bytes())?;
    payload.serialize_compressed(&mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_artifact<R: Read, T: CanonicalDeserialize>(
    mut reader: R,
    kind: ArtifactKind,
    circuit: &EligibilityCircuit,
) -> Result<T, ArtifactError> {
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => ArtifactError::BadMagic,
        _ => ArtifactError::Io(e),
    })?;
    ArtifactHeader::check(&header, kind, circuit)?;
    let payload = T::deserialize_compressed(&mut reader)?;
    if reader.read(&mut [0u8; 1])? != 0 {
        return Err(ArtifactError::TrailingBytes);
    }
    Ok(payload)
}

/// `eligibility.pk` becomes `eligibility.pk.tmp`, so concurrent saves of
/// sibling artifacts never share a temp file.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write through a sibling temp file so a crash never leaves a torn artifact.
pub fn save<T: CanonicalSerialize>(
    path: &Path,
    kind: ArtifactKind,
    circuit: &EligibilityCircuit,
    payload: &T,
) -> Result<(), ArtifactError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let tmp = temp_path(path);
    let mut buf = Vec::new();
    write_artifact(&mut buf, kind, circuit, payload)?;
    fs::write(&tmp, &buf)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), ?kind, bytes = buf.len(), "wrote artifact");
    Ok(())
}

pub fn load<T: CanonicalDeserialize>(
    path: &Path,
    kind: ArtifactKind,
    circuit: &EligibilityCircuit,
) -> Result<T, ArtifactError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ArtifactError::Missing(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    read_artifact(bytes.as_slice(), kind, circuit)
}

/// Where the three artifacts of one deployment live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub circuit: PathBuf,
    pub proving_key: PathBuf,
    pub verification_key: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            circuit: dir.join("eligibility.r1cs"),
            proving_key: dir.join("eligibility.pk"),
            verification_key: dir.join("eligibility.vk"),
        }
    }

    pub fn all_exist(&self) -> bool {
        self.circuit.exists() && self.proving_key.exists() && self.verification_key.exists()
    }

    pub fn save_all(
        &self,
        circuit: &EligibilityCircuit,
        pk: &ProvingKey,
    ) -> Result<(), ArtifactError> {
        save(&self.circuit, ArtifactKind::Circuit, circuit, circuit.r1cs())?;
        save(&self.proving_key, ArtifactKind::ProvingKey, circuit, pk)?;
        save(
            &self.verification_key,
            ArtifactKind::VerificationKey,
            circuit,
            pk.verification_key(),
        )?;
        Ok(())
    }

    /// Check the stored constraint system matches the compiled one exactly.
    pub fn check_circuit(&self, circuit: &EligibilityCircuit) -> Result<(), ArtifactError> {
        let stored: ccl_circuit::R1cs = load(&self.circuit, ArtifactKind::Circuit, circuit)?;
        if &stored != circuit.r1cs() {
            return Err(ArtifactError::CircuitMismatch);
        }
        Ok(())
    }

    pub fn load_verification_key(
        &self,
        circuit: &EligibilityCircuit,
    ) -> Result<VerificationKey, ArtifactError> {
        load(&self.verification_key, ArtifactKind::VerificationKey, circuit)
    }

    /// Proving key, cross-checked against the stored verification key.
    pub fn load_keys(
        &self,
        circuit: &EligibilityCircuit,
    ) -> Result<(ProvingKey, VerificationKey), ArtifactError> {
        let pk: ProvingKey = load(&self.proving_key, ArtifactKind::ProvingKey, circuit)?;
        let vk = self.load_verification_key(circuit)?;
        if pk.verification_key() != &vk {
            return Err(ArtifactError::KeyMismatch);
        }
        Ok((pk, vk))
    }
}
