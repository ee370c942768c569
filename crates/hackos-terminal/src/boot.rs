//! Scripted boot log shown when a terminal opens

use std::collections::VecDeque;

use chrono::{DateTime, FixedOffset};

use crate::output::{Fragment, OutputLine};
use crate::time;

const KERNEL_LOG: &str = "\
[    0.000000] Linux version 5.10.0-kali7-amd64 (devel@kali.org) (gcc version 10.2.1)
[    0.000000] Command line: BOOT_IMAGE=/boot/vmlinuz-5.10.0-kali7-amd64 root=UUID=12345678-1234-1234-1234-123456789abc ro quiet splash
[    0.000000] KERNEL supported cpus:
[    0.000000]   Intel GenuineIntel
[    0.000000]   AMD AuthenticAMD
[    0.000000] x86/fpu: Supporting XSAVE feature 0x001: 'x87 floating point registers'
[    0.000000] x86/fpu: Supporting XSAVE feature 0x002: 'SSE registers'
[    0.000000] x86/fpu: Supporting XSAVE feature 0x004: 'AVX registers'
[    0.000000] x86/fpu: Enabled xstate features 0x7, context size is 832 bytes
[    0.028000] Secure boot disabled
[    0.028000] ACPI: Early table checksum verification disabled
[    0.045000] ACPI: RSDP 0x00000000000F0490 000024 (v02 VBOX  )
[    0.156000] Zone ranges:
[    0.156000]   DMA      [mem 0x0000000000001000-0x0000000000ffffff]
[    0.156000]   DMA32    [mem 0x0000000001000000-0x00000000ffffffff]
[    0.156000]   Normal   [mem 0x0000000100000000-0x000000041fffffff]
[    0.345000] NET: Registered protocol family 16
[    0.567000] PCI: Using configuration type 1 for base access
[    0.789000] SCSI subsystem initialized
[    1.234000] Advanced Linux Sound Architecture Driver Initialized.
[    1.567000] e1000: Intel(R) PRO/1000 Network Driver - version 7.3.21-k8-NAPI
[    1.890000] ACPI: Power Button [PWRF]
[    2.123000] NET: Registered protocol family 2
[    2.345000] TCP established hash table entries: 131072 (order: 8, 1048576 bytes)
[    2.678000] Unpacking initramfs...
[    3.123000] Freeing initrd memory: 32768K
[    3.567000] FS-Cache: Loaded
[    4.234000] io scheduler deadline registered (default)
[    4.567000] vesafb: mode is 1024x768x32, linelength=4096, pages=0
[    5.123000] Console: switching to colour frame buffer device 128x48
[    5.567000] rtc_cmos 00:00: rtc core: registered rtc_cmos as rtc0
[    5.789000] TCP: cubic registered
[    6.234000] registered taskstats version 1
[    6.567000] Freeing unused kernel memory: 1316k freed
[    7.123000] systemd[1]: systemd 247.3-7+deb11u1 running in system mode.
[    7.234000] systemd[1]: Detected architecture x86-64.
[    7.345000] systemd[1]: Set hostname to <kali>.";

const BANNER: &str = r"
s|Welcome to Kali GNU/Linux Rolling

i|  ██╗  ██╗ █████╗ ██╗     ██╗
i|  ██║ ██╔╝██╔══██╗██║     ██║
i|  █████╔╝ ███████║██║     ██║
i|  ██╔═██╗ ██╔══██║██║     ██║
i|  ██║  ██╗██║  ██║███████╗██║
i|  ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝╚═╝

Kali GNU/Linux Rolling \n \l

The programs included with the Kali GNU/Linux system are free software;
the exact distribution terms for each program are described in the
individual files in /usr/share/doc/*/copyright.

Kali GNU/Linux comes with ABSOLUTELY NO WARRANTY, to the extent
permitted by applicable law.
";

/// Build the full boot script for a session started at `now`
pub(crate) fn boot_script(now: &DateTime<FixedOffset>) -> VecDeque<OutputLine> {
    Fragment::parse(KERNEL_LOG)
        .into_iter()
        .chain(Fragment::parse(BANNER))
        .chain([
            OutputLine::plain(format!("Last login: {} from 192.168.1.100", time::login_date(now))),
            OutputLine::plain(""),
        ])
        .collect()
}
