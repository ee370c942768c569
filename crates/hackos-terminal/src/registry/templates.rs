//! Templated tools
//!
//! Each template fills its text from the arguments, substituting a
//! plausible placeholder for anything missing.

use super::{CommandContext, CommandRegistry};
use crate::output::Fragment;
use crate::time;

pub(super) fn install(registry: &mut CommandRegistry) {
    registry.template("date", date);
    registry.template("nmap", nmap);
    registry.template("hydra", hydra);
    registry.template("john", john);
    registry.template("sqlmap", sqlmap);
    registry.template("msfconsole", msfconsole);
    registry.template("gobuster", gobuster);
    registry.template("aircrack-ng", aircrack);
    registry.template("hashcat", hashcat);
    registry.template("custom-exploit", custom_exploit);
    registry.template("penetration-test", penetration_test);
}

fn date(ctx: &CommandContext) -> Fragment {
    Fragment::new().success(time::long_date(&ctx.now))
}

fn nmap(ctx: &CommandContext) -> Fragment {
    let target = ctx.arg(0, "192.168.1.0/24");
    let scan = if ctx.has_flag("-sS") { "SYN Stealth Scan" } else { "TCP Connect Scan" };
    let host = target.split('/').next().unwrap_or(target);

    Fragment::new()
        .info("Starting Nmap 7.94 ( https://nmap.org )")
        .success(format!("[+] Performing {scan} on {target}..."))
        .warning(format!("Host: {host}"))
        .plain("PORT     STATE SERVICE     VERSION")
        .plain("22/tcp   open  ssh         OpenSSH 8.2p1")
        .plain("80/tcp   open  http        Apache httpd 2.4.41")
        .plain("443/tcp  open  https       Apache httpd 2.4.41")
        .plain("3306/tcp open  mysql       MySQL 8.0.25")
        .success("[+] Scan completed in 12.34 seconds")
}

fn service_port(service: &str) -> &'static str {
    match service {
        "ssh" => "22",
        "ftp" => "21",
        _ => "80",
    }
}

fn hydra(ctx: &CommandContext) -> Fragment {
    let target = ctx.arg(0, "192.168.1.100");
    let service = ctx.arg(1, "ssh");
    let port = service_port(service);

    Fragment::new()
        .info("Hydra v9.4 - Brute Force Attack")
        .success(format!("[+] Target: {target}:{port} ({})", service.to_uppercase()))
        .warning("[+] Wordlist: /usr/share/wordlists/rockyou.txt")
        .info("[*] Trying combinations...")
        .warning(format!("[{port}][{service}] host: {target}   login: admin   password: admin123"))
        .success("[+] Attack completed - 1 valid password found")
}

fn john(ctx: &CommandContext) -> Fragment {
    let hashfile = ctx.arg(0, "hashes.txt");
    let wordlist = ctx.flag_value("--wordlist", "rockyou.txt");

    Fragment::new()
        .info("John the Ripper 1.9.0")
        .success(format!("[+] Loading hashes from {hashfile}..."))
        .warning("[+] Detected hash type: MD5")
        .info(format!("[*] Using wordlist: {wordlist}"))
        .success("[+] Cracking in progress...")
        .warning("5d41402abc4b2a76b9719d911017c592:hello")
        .warning("098f6bcd4621d373cade4e832627b4f6:test")
        .success("[+] Session completed - 2/5 hashes cracked")
}

fn sqlmap(ctx: &CommandContext) -> Fragment {
    let url = ctx.arg(0, "http://192.168.1.100/login.php?id=1");

    Fragment::new()
        .info("sqlmap/1.7.2")
        .success(format!("[+] Testing: {url}"))
        .warning("[+] Parameter 'id' appears to be vulnerable")
        .info("[*] Testing MySQL UNION injection...")
        .success("[+] Injection confirmed!")
        .warning("[+] Available databases: [3]")
        .info("[*] information_schema, mysql, webapp")
        .success("[+] Current user: 'webapp@localhost'")
}

fn msfconsole(ctx: &CommandContext) -> Fragment {
    if !ctx.has_flag("use") {
        return Fragment::new()
            .info("       =[ metasploit v6.3.25-dev                         ]")
            .warning("+ -- --=[ 2328 exploits - 1219 auxiliary - 413 post       ]")
            .success("msf6 > Type 'help' for available commands");
    }

    let module = ctx.flag_value("use", "exploit/multi/handler");
    let short = module.rsplit('/').next().unwrap_or(module);

    Fragment::new()
        .success(format!("[*] Using {module}"))
        .warning(format!("msf6 {short} > show options"))
        .plain("")
        .plain(format!("Module options ({module}):"))
        .plain("")
        .plain("   Name     Current Setting  Required  Description")
        .plain("   ----     ---------------  --------  -----------")
        .plain("   LHOST                     yes       The listen address")
        .plain("   LPORT    4444             yes       The listen port")
        .plain("")
        .warning(format!("msf6 {short} >"))
}

fn gobuster(ctx: &CommandContext) -> Fragment {
    let url = ctx.flag_value("-u", "http://192.168.1.100");
    let wordlist = ctx.flag_value("-w", "common.txt");

    Fragment::new()
        .info("Gobuster v3.6")
        .success(format!("[+] URL: {url}"))
        .warning(format!("[+] Wordlist: {wordlist}"))
        .info("[*] Extensions: php,html,txt")
        .warning("/admin                (Status: 200) [Size: 1247]")
        .warning("/backup.php           (Status: 200) [Size: 0]")
        .warning("/config.txt           (Status: 200) [Size: 156]")
        .success("[+] Finished")
}

fn aircrack(ctx: &CommandContext) -> Fragment {
    let capfile = ctx.arg(0, "capture.cap");
    let wordlist = ctx.flag_value("-w", "rockyou.txt");

    Fragment::new()
        .info("Aircrack-ng 1.7")
        .success(format!("[+] Reading packets from {capfile}..."))
        .warning("[+] WPA handshake found for: HomeWiFi")
        .info(format!("[*] Wordlist: {wordlist}"))
        .success("[+] Testing passwords...")
        .warning("[+] KEY FOUND! [ password123 ]")
        .info("[*] Master Key: A1 B2 C3 D4 E5 F6...")
}

fn hashcat(ctx: &CommandContext) -> Fragment {
    let hashfile = ctx.arg(0, "hashes.txt");
    let attack = match ctx.flag_value("-a", "0") {
        "0" => "Dictionary",
        "3" => "Brute-force",
        _ => "Hybrid",
    };
    let mode = match ctx.flag_value("-m", "0") {
        "0" => "MD5",
        "1000" => "NTLM",
        "1800" => "SHA-512",
        _ => "Unknown",
    };

    Fragment::new()
        .info("hashcat (v6.2.6)")
        .success(format!("[+] Hash file: {hashfile}"))
        .warning(format!("[+] Attack mode: {attack}"))
        .info(format!("[*] Hash type: {mode}"))
        .warning("[+] Speed: 1,247.3 MH/s")
        .success("[+] Progress: 50000/14344385 (0.35%)")
        .warning("5d41402abc4b2a76b9719d911017c592:hello")
        .success("[+] Recovered 1 hash")
}

fn custom_exploit(ctx: &CommandContext) -> Fragment {
    let target = ctx.arg(0, "192.168.1.100");
    let port = ctx.arg(1, "443");

    Fragment::new()
        .warning("[+] CUSTOM EXPLOIT FRAMEWORK")
        .success(format!("[+] Target: {target}:{port}"))
        .info("[*] Scanning for vulnerabilities...")
        .warning("[+] Buffer overflow detected in service")
        .success("[+] Crafting payload...")
        .warning("[+] Payload size: 1024 bytes")
        .success("[+] Exploit sent successfully")
        .error(format!("[!] Shell acquired on {target}"))
        .info("[*] Type 'shell' to interact")
}

fn penetration_test(ctx: &CommandContext) -> Fragment {
    let target = ctx.arg(0, "192.168.1.0/24");

    Fragment::new()
        .warning("[+] AUTOMATED PENETRATION TEST")
        .success(format!("[+] Target scope: {target}"))
        .info("[*] Phase 1: Discovery (25%)")
        .warning("[+] Found 12 live hosts")
        .info("[*] Phase 2: Port scanning (50%)")
        .warning("[+] 47 open ports discovered")
        .info("[*] Phase 3: Vulnerability assessment (75%)")
        .error("[!] 8 critical vulnerabilities found")
        .info("[*] Phase 4: Exploitation (100%)")
        .success("[+] Compromised 3 systems")
        .warning(format!("[+] Report saved to /root/pentest_{}.html", ctx.now_ms()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::LineStyle;

    fn ctx(line: &str) -> CommandContext {
        let mut tokens = line.split_whitespace().map(str::to_string);
        let command = tokens.next().unwrap_or_default();
        CommandContext::new(command, tokens.collect(), time::local_time(1_705_347_757_000.0, 0))
    }

    fn text(fragment: &Fragment) -> String {
        fragment.lines().iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_nmap_defaults_and_flags() {
        let out = text(&nmap(&ctx("nmap")));
        assert!(out.contains("TCP Connect Scan on 192.168.1.0/24"));
        assert!(out.contains("Host: 192.168.1.0\n"));

        let out = text(&nmap(&ctx("nmap 10.0.0.5 -sS")));
        assert!(out.contains("SYN Stealth Scan on 10.0.0.5"));
        assert!(out.contains("Host: 10.0.0.5"));
    }

    #[test]
    fn test_hydra_service_port() {
        let out = text(&hydra(&ctx("hydra 10.0.0.9 ftp")));
        assert!(out.contains("Target: 10.0.0.9:21 (FTP)"));
        assert!(out.contains("[21][ftp] host: 10.0.0.9"));

        let out = text(&hydra(&ctx("hydra 10.0.0.9 http")));
        assert!(out.contains("10.0.0.9:80 (HTTP)"));
    }

    #[test]
    fn test_msfconsole_use_module() {
        let out = text(&msfconsole(&ctx("msfconsole use exploit/windows/smb/ms17_010")));
        assert!(out.contains("Using exploit/windows/smb/ms17_010"));
        assert!(out.contains("msf6 ms17_010 >"));

        // `use` without a module falls back to the handler
        let out = text(&msfconsole(&ctx("msfconsole use")));
        assert!(out.contains("Using exploit/multi/handler"));
    }

    #[test]
    fn test_hashcat_modes() {
        let out = text(&hashcat(&ctx("hashcat h.txt -a 3 -m 1000")));
        assert!(out.contains("Attack mode: Brute-force"));
        assert!(out.contains("Hash type: NTLM"));

        let out = text(&hashcat(&ctx("hashcat h.txt -a 9 -m 42")));
        assert!(out.contains("Attack mode: Hybrid"));
        assert!(out.contains("Hash type: Unknown"));
    }

    #[test]
    fn test_gobuster_missing_flag_value() {
        let out = text(&gobuster(&ctx("gobuster dir -u")));
        assert!(out.contains("URL: http://192.168.1.100"));
    }

    #[test]
    fn test_penetration_test_report_stamp() {
        let out = penetration_test(&ctx("penetration-test"));
        let last = out.lines().last().unwrap();
        assert_eq!(last.style, LineStyle::Warning);
        assert_eq!(last.text, "[+] Report saved to /root/pentest_1705347757000.html");
    }
}
