// Request numbers from <linux/input.h>; libc picks the _IOC layout per arch
use crate::event::EV_SND;

/// `EVIOCGSND(0)`: probe for the sound status interface without reading it.
pub fn eviocgsnd_probe() -> libc::Ioctl {
    libc::_IOR::<()>(b'E' as u32, 0x1a)
}

/// `EVIOCGBIT(EV_SND, sizeof(unsigned long))`: supported sound codes.
pub fn eviocgbit_snd() -> libc::Ioctl {
    libc::_IOR::<libc::c_ulong>(b'E' as u32, 0x20 + u32::from(EV_SND))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "riscv64"
    ))]
    fn test_request_numbers() {
        assert_eq!(eviocgsnd_probe() as u32, 0x8000_451a);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(eviocgbit_snd() as u32, 0x8008_4532);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(eviocgbit_snd() as u32, 0x8004_4532);
    }

    // 3 direction bits, 13 size bits
    #[test]
    #[cfg(any(
        target_arch = "powerpc",
        target_arch = "powerpc64",
        target_arch = "mips",
        target_arch = "mips64",
        target_arch = "sparc",
        target_arch = "sparc64"
    ))]
    fn test_request_numbers_wide_direction() {
        assert_eq!(eviocgsnd_probe() as u32, 0x4000_451a);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(eviocgbit_snd() as u32, 0x4008_4532);
        #[cfg(target_pointer_width = "32")]
        assert_eq!(eviocgbit_snd() as u32, 0x4004_4532);
    }
}
