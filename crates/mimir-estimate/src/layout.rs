//! Logical-to-physical qubit layout.

use crate::error::{EstimateError, EstimateResult};

/// A mapping between the circuit's logical qubits and the device's
/// physical qubits.
///
/// Both directions are kept dense: `logical_to_physical[l]` is the
/// physical home of logical qubit `l`, and `physical_to_logical[p]` is the
/// logical occupant of physical qubit `p` (or `None` for an unused
/// physical qubit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    logical_to_physical: Vec<u32>,
    physical_to_logical: Vec<Option<u32>>,
}

impl Layout {
    /// The identity layout: logical i → physical i.
    pub fn trivial(num_logical: u32, num_physical: u32) -> Self {
        let mut physical_to_logical = vec![None; num_physical as usize];
        for l in 0..num_logical {
            physical_to_logical[l as usize] = Some(l);
        }
        Self {
            logical_to_physical: (0..num_logical).collect(),
            physical_to_logical,
        }
    }

    /// Build a layout from an explicit mapping (`mapping[l]` = physical
    /// home of logical qubit `l`), validating length, uniqueness, and
    /// bounds.
    pub fn from_mapping(
        mapping: &[u32],
        num_logical: u32,
        num_physical: u32,
    ) -> EstimateResult<Self> {
        if mapping.len() != num_logical as usize {
            return Err(EstimateError::MappingLengthMismatch {
                expected: num_logical,
                got: mapping.len(),
            });
        }
        let mut physical_to_logical = vec![None; num_physical as usize];
        for (l, &p) in mapping.iter().enumerate() {
            if p >= num_physical {
                return Err(EstimateError::MappingOutOfRange {
                    qubit: p,
                    available: num_physical,
                });
            }
            if physical_to_logical[p as usize].is_some() {
                return Err(EstimateError::MappingDuplicate { qubit: p });
            }
            physical_to_logical[p as usize] = Some(l as u32);
        }
        Ok(Self {
            logical_to_physical: mapping.to_vec(),
            physical_to_logical,
        })
    }

    /// Physical home of a logical qubit.
    #[inline]
    pub fn physical(&self, logical: u32) -> u32 {
        self.logical_to_physical[logical as usize]
    }

    /// Logical occupant of a physical qubit, if any.
    #[inline]
    pub fn logical(&self, physical: u32) -> Option<u32> {
        self.physical_to_logical[physical as usize]
    }

    /// Whether a physical qubit currently hosts a logical qubit.
    #[inline]
    pub fn occupied(&self, physical: u32) -> bool {
        self.physical_to_logical[physical as usize].is_some()
    }

    /// Exchange the logical occupants of two physical qubits.
    pub fn swap_physical(&mut self, p1: u32, p2: u32) {
        let l1 = self.physical_to_logical[p1 as usize];
        let l2 = self.physical_to_logical[p2 as usize];

        if let Some(l) = l1 {
            self.logical_to_physical[l as usize] = p2;
        }
        if let Some(l) = l2 {
            self.logical_to_physical[l as usize] = p1;
        }
        self.physical_to_logical[p1 as usize] = l2;
        self.physical_to_logical[p2 as usize] = l1;
    }
}
