//! Fixed content of the non-interactive apps

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub icon: &'static str,
    pub name: &'static str,
    pub is_dir: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatBox {
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: &'static str,
}

/// Content of a static app window
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaticContent {
    FileList {
        entries: &'static [FileEntry],
    },
    NetworkStats {
        stats: &'static [StatBox],
        activity: &'static [&'static str],
    },
    SystemInfo {
        rows: &'static [InfoRow],
    },
    Editor {
        buttons: &'static [&'static str],
        file: &'static str,
        text: &'static str,
    },
}

const FILES: &[FileEntry] = &[
    FileEntry { icon: "folder", name: "Desktop", is_dir: true },
    FileEntry { icon: "folder", name: "Documents", is_dir: true },
    FileEntry { icon: "folder", name: "Downloads", is_dir: true },
    FileEntry { icon: "folder", name: "Tools", is_dir: true },
    FileEntry { icon: "🐍", name: "exploit.py", is_dir: false },
    FileEntry { icon: "⚙️", name: "keylogger.c", is_dir: false },
    FileEntry { icon: "📄", name: "passwords.txt", is_dir: false },
    FileEntry { icon: "📊", name: "network.log", is_dir: false },
];

const NETWORK_STATS: &[StatBox] = &[
    StatBox { title: "Network Status", value: "CONNECTED" },
    StatBox { title: "Active Connections", value: "7" },
    StatBox { title: "Data Transfer", value: "1.2 GB ↓ / 432 MB ↑" },
    StatBox { title: "Firewall Status", value: "ACTIVE" },
];

const NETWORK_ACTIVITY: &[&str] = &[
    "→ 192.168.1.1 - Gateway ping successful",
    "→ 8.8.8.8 - DNS resolution active",
    "→ 203.0.113.1 - SSH connection established",
    "→ 192.168.1.100 - Local scan initiated",
];

const SYSTEM_INFO: &[InfoRow] = &[
    InfoRow { label: "Operating System", value: "Kali Linux 2023.4" },
    InfoRow { label: "Kernel", value: "5.10.0-kali7-amd64" },
    InfoRow { label: "CPU", value: "Intel Core i7-12700K @ 3.60GHz" },
    InfoRow { label: "Memory", value: "16GB (4.2GB used)" },
    InfoRow { label: "Disk Usage", value: "512GB SSD (127GB used)" },
    InfoRow { label: "Uptime", value: "2 days, 14 hours, 37 minutes" },
    InfoRow { label: "Load Average", value: "0.52, 0.48, 0.51" },
    InfoRow { label: "Active Processes", value: "187" },
];

const EDITOR_BUTTONS: &[&str] = &["New", "Open", "Save", "Run"];

const EXPLOIT_PY: &str = r#"# Enter your exploit code here...
import socket
import sys

def exploit_target(host, port):
    try:
        s = socket.socket(socket.AF_INET, socket.SOCK_STREAM)
        s.connect((host, port))

        payload = 'A' * 1000  # Buffer overflow
        s.send(payload.encode())

        print('[+] Exploit sent successfully')
        print('[+] Waiting for shell...')

    except Exception as e:
        print(f'[-] Error: {e}')
    finally:
        s.close()

if __name__ == '__main__':
    if len(sys.argv) != 3:
        print('Usage: python exploit.py <host> <port>')
        sys.exit(1)

    host = sys.argv[1]
    port = int(sys.argv[2])
    exploit_target(host, port)"#;

pub(crate) fn file_manager() -> StaticContent {
    StaticContent::FileList { entries: FILES }
}

pub(crate) fn network_monitor() -> StaticContent {
    StaticContent::NetworkStats {
        stats: NETWORK_STATS,
        activity: NETWORK_ACTIVITY,
    }
}

pub(crate) fn system_monitor() -> StaticContent {
    StaticContent::SystemInfo { rows: SYSTEM_INFO }
}

pub(crate) fn code_editor() -> StaticContent {
    StaticContent::Editor {
        buttons: EDITOR_BUTTONS,
        file: "exploit.py",
        text: EXPLOIT_PY,
    }
}
