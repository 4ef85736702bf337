//! In-memory fake of a remote process for tests.
//!
//! Backed by a sparse byte map so fixtures can scatter structures
//! across realistic 64-bit addresses. Every read is logged, and
//! individual addresses can be poisoned to simulate unmapped pages.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

#[derive(Default)]
pub struct MockMemoryBuilder {
    bytes: BTreeMap<u64, u8>,
    failing: HashSet<u64>,
    alive: bool,
    exit_code: Option<u32>,
}

impl MockMemoryBuilder {
    pub fn new() -> Self {
        Self {
            alive: true,
            ..Default::default()
        }
    }

    pub fn bytes(mut self, address: u64, data: &[u8]) -> Self {
        for (i, &b) in data.iter().enumerate() {
            self.bytes.insert(address + i as u64, b);
        }
        self
    }

    pub fn u64(self, address: u64, value: u64) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    pub fn u32(self, address: u64, value: u32) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    pub fn i32(self, address: u64, value: i32) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    pub fn f32(self, address: u64, value: f32) -> Self {
        self.bytes(address, &value.to_le_bytes())
    }

    /// Make any read starting at `address` fail, simulating an
    /// unmapped or raced page.
    pub fn fail_at(mut self, address: u64) -> Self {
        self.failing.insert(address);
        self
    }

    /// Mark the fake process as terminated with the given exit code.
    pub fn terminated(mut self, exit_code: u32) -> Self {
        self.alive = false;
        self.exit_code = Some(exit_code);
        self
    }

    pub fn build(self) -> MockMemoryReader {
        MockMemoryReader {
            bytes: self.bytes,
            failing: self.failing,
            alive: self.alive,
            exit_code: self.exit_code,
            read_log: RefCell::new(Vec::new()),
        }
    }
}

pub struct MockMemoryReader {
    bytes: BTreeMap<u64, u8>,
    failing: HashSet<u64>,
    alive: bool,
    exit_code: Option<u32>,
    read_log: RefCell<Vec<u64>>,
}

impl MockMemoryReader {
    /// Start addresses of every read performed so far.
    pub fn read_log(&self) -> Vec<u64> {
        self.read_log.borrow().clone()
    }
}

impl ReadMemory for MockMemoryReader {
    fn read_bytes(&self, address: u64, len: usize) -> Result<Vec<u8>> {
        self.read_log.borrow_mut().push(address);

        if self.failing.contains(&address) {
            return Err(Error::MemoryReadFailed {
                address,
                message: "injected read failure".to_string(),
            });
        }

        let mut out = Vec::with_capacity(len);
        for i in 0..len as u64 {
            match self.bytes.get(&(address + i)) {
                Some(&b) => out.push(b),
                None => {
                    return Err(Error::MemoryReadFailed {
                        address,
                        message: format!("unmapped address {:#x}", address + i),
                    });
                }
            }
        }
        Ok(out)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn exit_code(&self) -> Option<u32> {
        self.exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_return_written_bytes() {
        let mem = MockMemoryBuilder::new().bytes(0x100, &[1, 2, 3, 4]).build();
        assert_eq!(mem.read_bytes(0x100, 4).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mem.read_bytes(0x102, 2).unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_gap_in_mapping_fails() {
        let mem = MockMemoryBuilder::new()
            .bytes(0x100, &[1, 2])
            .bytes(0x104, &[5, 6])
            .build();
        assert!(mem.read_bytes(0x100, 8).is_err());
    }

    #[test]
    fn test_terminated_process_state() {
        let mem = MockMemoryBuilder::new().terminated(9).build();
        assert!(!mem.is_alive());
        assert_eq!(mem.exit_code(), Some(9));
    }
}
