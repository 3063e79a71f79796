//! Finding the Sense HAT devices.
//!
//! Both devices are found the same way: list the directory entries with the
//! right prefix in natural order (`fb0`, `fb1`, `fb10`), open each one, ask
//! the driver for its name and keep the first exact match.

use std::cmp::Ordering;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::DeviceError;

pub const DEV_DIR: &str = "/dev";
pub const INPUT_DIR: &str = "/dev/input";
pub const FB_PREFIX: &str = "fb";
pub const EVENT_PREFIX: &str = "event";

/// `FBIOGET_FSCREENINFO` from `linux/fb.h`
const FBIOGET_FSCREENINFO: u32 = 0x4602;

/// `EVIOCGNAME(len)` from `linux/input.h`: `_IOC(_IOC_READ, 'E', 0x06, len)`
const fn eviocgname(len: usize) -> u32 {
    (2 << 30) | ((len as u32) << 16) | ((b'E' as u32) << 8) | 0x06
}

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[derive(Default)]
#[allow(dead_code)]
struct FbFixScreeninfo {
    id: [u8; 16],
    smem_start: libc::c_ulong,
    smem_len: u32,
    kind: u32,
    kind_aux: u32,
    visual: u32,
    xpanstep: u16,
    ypanstep: u16,
    ywrapstep: u16,
    line_length: u32,
    mmio_start: libc::c_ulong,
    mmio_len: u32,
    accel: u32,
    capabilities: u16,
    reserved: [u16; 2],
}

/// Compare names the way `versionsort` does for device nodes: digit runs
/// compare by value, everything else byte-wise.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a.as_bytes(), b.as_bytes());
    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let na = a.iter().take_while(|c| c.is_ascii_digit()).count();
                let nb = b.iter().take_while(|c| c.is_ascii_digit()).count();
                let da = trim_zeros(&a[..na]);
                let db = trim_zeros(&b[..nb]);
                let ord = da.len().cmp(&db.len()).then_with(|| da.cmp(db));
                if ord != Ordering::Equal {
                    return ord;
                }
                a = &a[na..];
                b = &b[nb..];
            }
            (Some(ca), Some(cb)) => {
                if ca != cb {
                    return ca.cmp(cb);
                }
                a = &a[1..];
                b = &b[1..];
            }
        }
    }
}

fn trim_zeros(digits: &[u8]) -> &[u8] {
    let first = digits.iter().position(|&d| d != b'0').unwrap_or(digits.len());
    &digits[first..]
}

/// Entries of `dir` whose file name starts with `prefix`, in natural order.
pub fn candidates(dir: &Path, prefix: &str) -> io::Result<Vec<PathBuf>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort_by(|a, b| natural_cmp(a, b));
    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// First candidate whose reported name equals `wanted`.
///
/// `probe` opens a path and reports the device name; it returns `None` for
/// anything that cannot be opened or queried, and that candidate is skipped.
pub fn find_by_name<T>(
    paths: &[PathBuf],
    wanted: &str,
    mut probe: impl FnMut(&Path) -> Option<(T, String)>,
) -> Option<(T, PathBuf)> {
    for path in paths {
        let Some((handle, name)) = probe(path) else {
            continue;
        };
        debug!("{} reports '{}'", path.display(), name);
        if name == wanted {
            return Some((handle, path.clone()));
        }
    }
    None
}

fn c_name(raw: &[u8]) -> String {
    let end = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).into_owned()
}

fn framebuffer_id(file: &File) -> io::Result<String> {
    let mut info = FbFixScreeninfo::default();
    // SAFETY: FBIOGET_FSCREENINFO writes one `fb_fix_screeninfo`, which
    // `info` mirrors with the kernel's layout.
    let rc = unsafe {
        libc::ioctl(
            file.as_raw_fd(),
            FBIOGET_FSCREENINFO as _,
            &mut info as *mut FbFixScreeninfo,
        )
    };
    if rc < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(c_name(&info.id))
}

fn event_device_name(file: &File) -> io::Result<String> {
    let mut name = [0u8; 256];
    // SAFETY: EVIOCGNAME writes at most `name.len()` bytes into `name`.
    let rc = unsafe {
        libc::ioctl(
            file.as_raw_fd(),
            eviocgname(name.len()) as _,
            name.as_mut_ptr(),
        )
    };
    if rc < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(c_name(&name))
}

/// Open the framebuffer named `name` (read/write) from `dir`.
pub fn open_framebuffer(dir: &Path, name: &str) -> Result<File, DeviceError> {
    let paths = candidates(dir, FB_PREFIX).map_err(|source| DeviceError::Scan {
        dir: dir.to_path_buf(),
        source,
    })?;
    let found = find_by_name(&paths, name, |path| {
        let file = OpenOptions::new().read(true).write(true).open(path).ok()?;
        let id = framebuffer_id(&file).ok()?;
        Some((file, id))
    });
    match found {
        Some((file, path)) => {
            debug!("using framebuffer {}", path.display());
            Ok(file)
        }
        None => Err(DeviceError::FramebufferNotFound {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        }),
    }
}

/// Open the event device named `name` (read-only, non-blocking) from `dir`.
pub fn open_event_device(dir: &Path, name: &str) -> Result<File, DeviceError> {
    let paths = candidates(dir, EVENT_PREFIX).map_err(|source| DeviceError::Scan {
        dir: dir.to_path_buf(),
        source,
    })?;
    let found = find_by_name(&paths, name, |path| {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .ok()?;
        let dev_name = event_device_name(&file).ok()?;
        Some((file, dev_name))
    });
    match found {
        Some((file, path)) => {
            debug!("using event device {}", path.display());
            Ok(file)
        }
        None => Err(DeviceError::EventDeviceNotFound {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        }),
    }
}
