//! Canned output for commands that ignore their arguments

use super::CommandRegistry;

pub(super) fn install(registry: &mut CommandRegistry) {
    for (key, markup) in LITERALS {
        registry.literal(*key, markup);
    }
}

const LITERALS: &[(&str, &str)] = &[
    ("help", HELP),
    ("ls", LS),
    ("whoami", "s|root"),
    ("pwd", "s|/root"),
    ("id", "s|uid=0(root) gid=0(root) groups=0(root)"),
    ("uname", "s|Linux"),
    (
        "uname -a",
        "s|Linux kali 5.10.0-kali7-amd64 #1 SMP Debian 5.10.28-1kali1 (2021-04-12) x86_64 GNU/Linux",
    ),
    ("env", ENV),
    ("ps", PS),
    ("netstat", NETSTAT),
    ("ifconfig", IFCONFIG),
    ("free -h", FREE),
    ("df -h", DF),
    ("cat /etc/passwd", PASSWD),
    ("hack", HACK),
    ("matrix", MATRIX),
    ("nmap", NMAP),
    ("hydra", HYDRA),
    ("john", JOHN),
    ("msfconsole", MSFCONSOLE),
];

const HELP: &str = r"i|Available commands:
  ls        - List directory contents
  whoami    - Display current user
  uname     - System information
  ps        - Show running processes
  netstat   - Network connections
  clear     - Clear terminal
  pwd       - Print working directory
  date      - Show current date and time
  id        - Show user and group IDs

i|  Password Cracking:
w|  john [hashfile]           - John the Ripper password cracker
w|  hashcat [hashes]          - Advanced password recovery
w|  hydra [target] [service]  - Brute force authentication
w|  crack-passwords           - Infinite password cracking animation

i|  Network Reconnaissance:
w|  nmap [target]             - Network port scanner
w|  gobuster -u [url]         - Directory/file enumeration

i|  Web Application Testing:
w|  sqlmap [url]              - SQL injection testing

i|  Wireless Security:
w|  aircrack-ng [capfile]     - WEP/WPA/WPA2 cracking

i|  Exploitation Frameworks:
w|  msfconsole                - Metasploit framework

i|  Custom Simulations:
w|  penetration-test [target] - Automated pentest
w|  custom-exploit [target]   - Custom exploit framework

i|  Fun Commands:
w|  hack                      - Initiate hacking sequence
w|  matrix                    - Enter the matrix

i|  Note: Most tools support parameters. Try: nmap 192.168.1.100 or hydra target ssh";

const LS: &str = "total 48
drwx------ 18 root root 4096 Jan 15 14:30 .
drwxr-xr-x 19 root root 4096 Jan 15 12:15 ..
-rw-------  1 root root 1024 Jan 15 14:25 .bash_history
-rw-r--r--  1 root root  570 Jan 10 01:06 .bashrc
drwxr-xr-x  2 root root 4096 Jan 15 14:30 Desktop
drwxr-xr-x  2 root root 4096 Jan 15 14:30 Documents
drwxr-xr-x  2 root root 4096 Jan 15 14:30 Downloads
w|-rwxr-xr-x  1 root root 8192 Jan 15 14:30 exploit.py
w|-rwxr-xr-x  1 root root 2048 Jan 15 14:30 keylogger.c
-rw-r--r--  1 root root  161 Dec  5 19:20 .profile
drwxr-xr-x  2 root root 4096 Jan 15 14:30 Tools";

const ENV: &str = "s|USER=root
s|LOGNAME=root
s|HOME=/root
s|PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin
s|SHELL=/bin/bash
s|TERM=xterm-256color
s|LANG=en_US.UTF-8
s|PWD=/root
s|DISPLAY=:0.0
s|SSH_TTY=/dev/pts/0
s|SSH_CONNECTION=192.168.1.100 54321 192.168.1.50 22";

const PS: &str = "s|  PID TTY          TIME CMD
    1 ?        00:00:01 systemd
  123 ?        00:00:00 kthreadd
  456 ?        00:00:00 ksoftirqd/0
  789 pts/0    00:00:00 bash
w| 1337 pts/0    00:00:00 exploit
 1521 pts/0    00:00:00 ps";

const NETSTAT: &str = "i|Active Internet connections (w/o servers)
s|Proto Recv-Q Send-Q Local Address           Foreign Address         State
tcp        0      0 127.0.0.1:3306          0.0.0.0:*               LISTEN
tcp        0      0 0.0.0.0:22              0.0.0.0:*               LISTEN
tcp        0      0 192.168.1.100:443       203.0.113.1:80          ESTABLISHED
tcp6       0      0 :::22                   :::*                    LISTEN";

const IFCONFIG: &str = "s|eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.100  netmask 255.255.255.0  broadcast 192.168.1.255
        inet6 fe80::a00:27ff:fe4e:66a1  prefixlen 64  scopeid 0x20<link>
        ether 08:00:27:4e:66:a1  txqueuelen 1000  (Ethernet)
        RX packets 2847  bytes 4067896 (3.8 MiB)
        TX packets 1983  bytes 244761 (239.0 KiB)";

const FREE: &str = "              total        used        free      shared  buff/cache   available
Mem:           7.8G        3.2G        1.5G        234M        3.1G        4.1G
Swap:          2.0G          0B        2.0G";

const DF: &str = "Filesystem      Size  Used Avail Use% Mounted on
udev            3.9G     0  3.9G   0% /dev
tmpfs           795M  1.7M  794M   1% /run
/dev/sda1        49G   23G   24G  49% /
tmpfs           3.9G     0  3.9G   0% /dev/shm
/dev/sda15      105M  5.2M  100M   5% /boot/efi";

const PASSWD: &str = "s|root:x:0:0:root:/root:/bin/bash
daemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin
bin:x:2:2:bin:/bin:/usr/sbin/nologin
sys:x:3:3:sys:/dev:/usr/sbin/nologin
w|hacker:x:1000:1000:Elite Hacker,,,:/home/hacker:/bin/bash
mysql:x:112:117:MySQL Server,,,:/nonexistent:/bin/false";

const HACK: &str = "w|[+] Initializing hacking sequence...
w|[+] Loading exploit modules...
s|[+] Scanning for vulnerabilities...
s|[+] Found 13 open ports on target 192.168.1.0/24
w|[+] Exploiting buffer overflow in service...
w|[+] Payload delivered successfully
s|[+] Gaining root access...
s|[+] Access GRANTED! Welcome to the mainframe.
i|[!] Remember: With great power comes great responsibility.";

const MATRIX: &str = "s|Wake up, Neo...
i|The Matrix has you...
w|Follow the white rabbit.
s|Knock, knock, Neo.";

const NMAP: &str = "i|Starting Nmap 7.94 ( https://nmap.org )
s|Nmap scan report for 192.168.1.1
Host is up (0.0012s latency).
Not shown: 996 closed tcp ports (reset)
PORT     STATE SERVICE
22/tcp   open  ssh
80/tcp   open  http
443/tcp  open  https
8080/tcp open  http-proxy
s|Nmap done: 256 IP addresses (4 hosts up) scanned in 3.21 seconds";

const HYDRA: &str = "i|Hydra v9.4 (c) 2022 by van Hauser/THC & David Maciejak
Syntax: hydra [[[-l LOGIN|-L FILE] [-p PASS|-P FILE]] | [-C FILE]] [-e nsr] [-o FILE] [-t TASKS]
w|Example: hydra -l admin -P rockyou.txt ssh://192.168.1.100";

const JOHN: &str = "i|John the Ripper 1.9.0-jumbo-1 (OMP) [linux-gnu 64-bit]
Copyright (c) 1996-2019 by Solar Designer and others
Usage: john [OPTIONS] [PASSWORD-FILES]
w|--wordlist[=FILE] --stdin    wordlist mode, read words from FILE or stdin";

const MSFCONSOLE: &str = "i|       =[ metasploit v6.3.25-dev                         ]
w|+ -- --=[ 2328 exploits - 1219 auxiliary - 413 post       ]
w|+ -- --=[ 1385 payloads - 46 encoders - 11 nops           ]
s|msf6 > Type 'help' for available commands";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{Fragment, LineStyle};

    #[test]
    fn test_every_literal_parses_to_output() {
        for (key, markup) in LITERALS {
            assert!(!Fragment::parse(markup).is_empty(), "{key} is empty");
        }
    }

    #[test]
    fn test_styles_applied() {
        let ps = Fragment::parse(PS);
        assert_eq!(ps.lines()[0].style, LineStyle::Success);
        assert_eq!(ps.lines()[1].style, LineStyle::Plain);
        assert_eq!(ps.lines()[4].style, LineStyle::Plain);
        assert_eq!(ps.lines()[5].style, LineStyle::Warning);
        assert!(ps.lines()[5].text.ends_with("exploit"));
    }
}
