use crate::error::{Error, Result};

/// Read-only access into another process's address space.
///
/// All reads are best-effort: an invalid or unmapped address fails
/// with `Error::MemoryReadFailed` and must never crash the caller.
/// The scanner treats such failures as "this value is unavailable
/// this tick", not as a reason to abort the refresh.
pub trait ReadMemory {
    /// Read `len` raw bytes at an absolute remote address.
    fn read_bytes(&self, address: u64, len: usize) -> Result<Vec<u8>>;

    /// Whether the target process is still running.
    fn is_alive(&self) -> bool {
        true
    }

    /// Exit code of the target process, once it has terminated.
    fn exit_code(&self) -> Option<u32> {
        None
    }

    /// Read a native-word pointer value.
    fn read_u64(&self, address: u64) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array::<8>(address)?))
    }

    fn read_i64(&self, address: u64) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_array::<8>(address)?))
    }

    fn read_u32(&self, address: u64) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array::<4>(address)?))
    }

    fn read_i32(&self, address: u64) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>(address)?))
    }

    fn read_f32(&self, address: u64) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array::<4>(address)?))
    }

    /// Read a fixed-size little-endian value.
    fn read_array<const N: usize>(&self, address: u64) -> Result<[u8; N]> {
        let bytes = self.read_bytes(address, N)?;
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::MemoryReadFailed {
                address,
                message: format!("short read: expected {N} bytes, got {}", bytes.len()),
            })
    }
}

impl<R: ReadMemory + ?Sized> ReadMemory for &R {
    fn read_bytes(&self, address: u64, len: usize) -> Result<Vec<u8>> {
        (**self).read_bytes(address, len)
    }

    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }

    fn exit_code(&self) -> Option<u32> {
        (**self).exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    #[test]
    fn test_typed_reads_are_little_endian() {
        let mem = MockMemoryBuilder::new()
            .u64(0x1000, 0x1122_3344_5566_7788)
            .i32(0x2000, -7)
            .f32(0x3000, 1.5)
            .build();

        assert_eq!(mem.read_u64(0x1000).unwrap(), 0x1122_3344_5566_7788);
        assert_eq!(mem.read_u32(0x1000).unwrap(), 0x5566_7788);
        assert_eq!(mem.read_i32(0x2000).unwrap(), -7);
        assert_eq!(mem.read_f32(0x3000).unwrap(), 1.5);
    }

    #[test]
    fn test_unmapped_read_fails_without_panic() {
        let mem = MockMemoryBuilder::new().build();
        let err = mem.read_u64(0xDEAD_0000).unwrap_err();
        assert!(err.is_read_failure());
    }
}
