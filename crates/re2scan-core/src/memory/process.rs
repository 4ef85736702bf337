//! Process attachment and remote memory reads.
//!
//! The OS handle is exclusively owned by one `ProcessHandle` and is
//! released when it is dropped, including on early-failure paths
//! during initialization.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

/// A process located by name: pid, main-module base address, and the
/// path of its executable on disk.
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    pub pid: u32,
    pub base_address: u64,
    pub exe_path: PathBuf,
}

#[cfg(target_os = "windows")]
mod imp {
    use super::*;

    use windows::Win32::Foundation::{CloseHandle, HANDLE, MAX_PATH, STILL_ACTIVE};
    use windows::Win32::System::Diagnostics::Debug::ReadProcessMemory;
    use windows::Win32::System::Diagnostics::ToolHelp::{
        CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
        TH32CS_SNAPPROCESS,
    };
    use windows::Win32::System::ProcessStatus::{
        EnumProcessModulesEx, GetModuleInformation, LIST_MODULES_64BIT, MODULEINFO,
    };
    use windows::Win32::System::Threading::{
        GetExitCodeProcess, OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_INFORMATION,
        PROCESS_VM_READ, QueryFullProcessImageNameW,
    };
    use windows::core::PWSTR;

    /// Read-only handle to a running process.
    pub struct ProcessHandle {
        handle: HANDLE,
        pid: u32,
    }

    // The handle grants PROCESS_VM_READ | PROCESS_QUERY_INFORMATION
    // only; reads from other threads cannot race destructively.
    unsafe impl Send for ProcessHandle {}

    impl ProcessHandle {
        /// Open a process for reading by pid.
        pub fn open(pid: u32) -> Result<Self> {
            // SAFETY: OpenProcess returns an owned handle on success.
            let handle = unsafe {
                OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_VM_READ, false, pid)
            }
            .map_err(|e| Error::ProcessOpenFailed(format!("pid {pid}: {e}")))?;

            Ok(Self { handle, pid })
        }

        pub fn pid(&self) -> u32 {
            self.pid
        }
    }

    impl ReadMemory for ProcessHandle {
        fn read_bytes(&self, address: u64, len: usize) -> Result<Vec<u8>> {
            let mut buffer = vec![0u8; len];
            let mut bytes_read = 0usize;

            // SAFETY: buffer outlives the call and is at least `len`
            // bytes; a fault in the target address range is reported
            // as an error, not propagated.
            unsafe {
                ReadProcessMemory(
                    self.handle,
                    address as *const core::ffi::c_void,
                    buffer.as_mut_ptr().cast(),
                    len,
                    Some(&mut bytes_read),
                )
            }
            .map_err(|e| Error::MemoryReadFailed {
                address,
                message: e.to_string(),
            })?;

            if bytes_read != len {
                return Err(Error::MemoryReadFailed {
                    address,
                    message: format!("partial read: {bytes_read} of {len} bytes"),
                });
            }

            Ok(buffer)
        }

        fn is_alive(&self) -> bool {
            self.exit_code().is_none()
        }

        fn exit_code(&self) -> Option<u32> {
            let mut code = 0u32;
            // SAFETY: handle was opened with PROCESS_QUERY_INFORMATION.
            let ok = unsafe { GetExitCodeProcess(self.handle, &mut code) }.is_ok();
            if ok && code != STILL_ACTIVE.0 as u32 {
                Some(code)
            } else {
                None
            }
        }
    }

    impl Drop for ProcessHandle {
        fn drop(&mut self) {
            // SAFETY: the handle is owned and closed exactly once.
            unsafe {
                let _ = CloseHandle(self.handle);
            }
        }
    }

    /// Locate a running process by executable name.
    pub fn find_process(name: &str) -> Result<ProcessInfo> {
        // SAFETY: snapshot handle is closed before returning.
        let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
            .map_err(|e| Error::ProcessOpenFailed(format!("snapshot failed: {e}")))?;

        let mut entry = PROCESSENTRY32W {
            dwSize: size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        let mut pid = None;
        // SAFETY: entry.dwSize is initialized as required.
        if unsafe { Process32FirstW(snapshot, &mut entry) }.is_ok() {
            loop {
                let exe = String::from_utf16_lossy(
                    &entry.szExeFile[..entry
                        .szExeFile
                        .iter()
                        .position(|&c| c == 0)
                        .unwrap_or(entry.szExeFile.len())],
                );
                if exe.eq_ignore_ascii_case(name) {
                    pid = Some(entry.th32ProcessID);
                    break;
                }
                // SAFETY: same entry, advanced by the API.
                if unsafe { Process32NextW(snapshot, &mut entry) }.is_err() {
                    break;
                }
            }
        }

        // SAFETY: snapshot handle is owned here.
        unsafe {
            let _ = CloseHandle(snapshot);
        }

        let pid = pid.ok_or_else(|| Error::ProcessNotFound(name.to_string()))?;
        let handle = ProcessHandle::open(pid)?;

        let mut module = Default::default();
        let mut needed = 0u32;
        // SAFETY: asks for the first (main) module only.
        unsafe {
            EnumProcessModulesEx(
                handle.handle,
                &mut module,
                size_of_val(&module) as u32,
                &mut needed,
                LIST_MODULES_64BIT,
            )
        }
        .map_err(|e| Error::ProcessOpenFailed(format!("module enumeration failed: {e}")))?;

        let mut info = MODULEINFO::default();
        // SAFETY: module comes from EnumProcessModulesEx above.
        unsafe {
            GetModuleInformation(
                handle.handle,
                module,
                &mut info,
                size_of::<MODULEINFO>() as u32,
            )
        }
        .map_err(|e| Error::ProcessOpenFailed(format!("module info failed: {e}")))?;

        let mut path_buf = [0u16; MAX_PATH as usize];
        let mut path_len = path_buf.len() as u32;
        // SAFETY: buffer is MAX_PATH wide characters.
        unsafe {
            QueryFullProcessImageNameW(
                handle.handle,
                PROCESS_NAME_WIN32,
                PWSTR(path_buf.as_mut_ptr()),
                &mut path_len,
            )
        }
        .map_err(|e| Error::ProcessOpenFailed(format!("image name query failed: {e}")))?;

        let exe_path = PathBuf::from(String::from_utf16_lossy(&path_buf[..path_len as usize]));

        Ok(ProcessInfo {
            pid,
            base_address: info.lpBaseOfDll as u64,
            exe_path,
        })
    }
}

#[cfg(not(target_os = "windows"))]
mod imp {
    use super::*;

    /// Read-only handle to a running process (Windows only).
    pub struct ProcessHandle {
        pid: u32,
    }

    impl ProcessHandle {
        pub fn open(pid: u32) -> Result<Self> {
            let _ = pid;
            Err(Error::ProcessOpenFailed(
                "process attachment is only supported on Windows".to_string(),
            ))
        }

        pub fn pid(&self) -> u32 {
            self.pid
        }
    }

    impl ReadMemory for ProcessHandle {
        fn read_bytes(&self, address: u64, _len: usize) -> Result<Vec<u8>> {
            Err(Error::MemoryReadFailed {
                address,
                message: "process memory reads are only supported on Windows".to_string(),
            })
        }
    }

    pub fn find_process(name: &str) -> Result<ProcessInfo> {
        let _ = name;
        Err(Error::ProcessNotFound(
            "process lookup is only supported on Windows".to_string(),
        ))
    }
}

pub use imp::{ProcessHandle, find_process};
