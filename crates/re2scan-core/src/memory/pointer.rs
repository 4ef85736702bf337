use crate::memory::ReadMemory;

/// A multi-level pointer: a fixed base address plus an ordered list
/// of byte offsets applied through successive dereferences.
///
/// Game objects behind these chains are reallocated constantly, so a
/// chain is re-walked from scratch on every refresh and the result is
/// never cached across ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerChain {
    base: u64,
    offsets: Vec<u64>,
}

impl PointerChain {
    pub fn new(base: u64, offsets: &[u64]) -> Self {
        Self {
            base,
            offsets: offsets.to_vec(),
        }
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Walk the chain and return the final address.
    ///
    /// Reads the pointer stored at the base address, then for each
    /// offset adds it to the previous value and reads the pointer
    /// stored there. An empty offset list therefore resolves to the
    /// single first-level pointer value.
    ///
    /// A zero result means "currently unavailable" (the chain broke,
    /// e.g. the object was destroyed in-game) and is an expected
    /// outcome, not an error. A zero intermediate value or a failed
    /// read short-circuits to zero without touching address zero.
    pub fn resolve<R: ReadMemory>(&self, reader: &R) -> u64 {
        let Ok(mut address) = reader.read_u64(self.base) else {
            return 0;
        };

        for &offset in &self.offsets {
            if address == 0 {
                return 0;
            }
            address = match reader.read_u64(address.wrapping_add(offset)) {
                Ok(next) => next,
                Err(_) => return 0,
            };
        }

        address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    #[test]
    fn test_empty_offset_list_is_single_dereference() {
        let mem = MockMemoryBuilder::new().u64(0x1000, 0xCAFE).build();
        let chain = PointerChain::new(0x1000, &[]);
        assert_eq!(chain.resolve(&mem), 0xCAFE);
    }

    #[test]
    fn test_multi_level_resolution() {
        let mem = MockMemoryBuilder::new()
            .u64(0x1000, 0x2000)
            .u64(0x2000 + 0x50, 0x3000)
            .u64(0x3000 + 0x10, 0x4000)
            .build();

        let chain = PointerChain::new(0x1000, &[0x50, 0x10]);
        assert_eq!(chain.resolve(&mem), 0x4000);
    }

    #[test]
    fn test_zero_intermediate_short_circuits_without_reading_zero() {
        let mem = MockMemoryBuilder::new()
            .u64(0x1000, 0x2000)
            .u64(0x2000 + 0x50, 0) // broken link
            .build();

        let chain = PointerChain::new(0x1000, &[0x50, 0x0, 0x10]);
        assert_eq!(chain.resolve(&mem), 0);

        // Nothing near the null page was ever dereferenced.
        for address in mem.read_log() {
            assert!(
                address >= 0x1000,
                "read at {address:#x} after the chain broke"
            );
        }
    }

    #[test]
    fn test_unmapped_base_resolves_to_zero() {
        let mem = MockMemoryBuilder::new().build();
        let chain = PointerChain::new(0x1000, &[0x8]);
        assert_eq!(chain.resolve(&mem), 0);
    }

    #[test]
    fn test_failed_intermediate_read_resolves_to_zero() {
        let mem = MockMemoryBuilder::new()
            .u64(0x1000, 0x2000)
            .fail_at(0x2000 + 0x50)
            .build();

        let chain = PointerChain::new(0x1000, &[0x50]);
        assert_eq!(chain.resolve(&mem), 0);
    }
}
