// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Lossless conversions to and from `ark-groth16` types.

use ark_bn254::Bn254;

use crate::keys::VerificationKey;
use crate::proof::Proof;

impl From<&VerificationKey> for ark_groth16::VerifyingKey<Bn254> {
    fn from(vk: &VerificationKey) -> Self {
        ark_groth16::VerifyingKey {
            alpha_g1: vk.alpha_g1,
            beta_g2: vk.beta_g2,
            gamma_g2: vk.gamma_g2,
            delta_g2: vk.delta_g2,
            gamma_abc_g1: vk.ic.clone(),
        }
    }
}

impl From<ark_groth16::VerifyingKey<Bn254>> for VerificationKey {
    fn from(vk: ark_groth16::VerifyingKey<Bn254>) -> Self {
        Self {
            alpha_g1: vk.alpha_g1,
            beta_g2: vk.beta_g2,
            gamma_g2: vk.gamma_g2,
            delta_g2: vk.delta_g2,
            ic: vk.gamma_abc_g1,
        }
    }
}

impl From<Proof> for ark_groth16::Proof<Bn254> {
    fn from(p: Proof) -> Self {
        ark_groth16::Proof {
            a: p.a,
            b: p.b,
            c: p.c,
        }
    }
}

impl From<ark_groth16::Proof<Bn254>> for Proof {
    fn from(p: ark_groth16::Proof<Bn254>) -> Self {
        Self {
            a: p.a,
            b: p.b,
            c: p.c,
        }
    }
}
