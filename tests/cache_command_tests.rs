use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use std::time::Duration;

mod common;
use common::repository::*;
use statusline::{CacheEntry, TtlCache};

fn compact_cmd(home: &TestHome) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("statusline")?;
    cmd.env("HOME", home.path()).args(["cache", "compact"]);
    Ok(cmd)
}

#[cfg(test)]
mod cache_command_tests {
    use super::*;

    #[test]
    fn test_compact_missing_cache_keeps_nothing() -> anyhow::Result<()> {
        let home = TestHome::new()?;

        compact_cmd(&home)?
            .assert()
            .success()
            .stdout(predicate::str::contains("0 entries kept"));

        Ok(())
    }

    #[test]
    fn test_compact_keeps_latest_live_entry_per_key() -> anyhow::Result<()> {
        let home = TestHome::new()?;
        let cache = TtlCache::new(home.cache_file(), Duration::from_secs(300));
        cache.set("github_notifications", "1")?;
        cache.set("other", "x")?;
        cache.set("github_notifications", "5")?;

        let mut expired = CacheEntry::new("stale", "old");
        expired.timestamp -= chrono::Duration::hours(1);
        let mut content = fs::read_to_string(home.cache_file())?;
        content.push_str(&serde_json::to_string(&expired)?);
        content.push('\n');
        fs::write(home.cache_file(), content)?;

        compact_cmd(&home)?
            .assert()
            .success()
            .stdout(predicate::str::contains("2 entries kept"));

        let lines = fs::read_to_string(home.cache_file())?;
        assert_eq!(lines.lines().count(), 2);
        assert_eq!(cache.get("github_notifications").as_deref(), Some("5"));
        assert_eq!(cache.get("other").as_deref(), Some("x"));
        assert_eq!(cache.get("stale"), None);

        Ok(())
    }

    #[test]
    fn test_compact_honors_cache_file_flag() -> anyhow::Result<()> {
        let home = TestHome::new()?;
        let custom = home.path().join("elsewhere").join("cache");
        TtlCache::new(&custom, Duration::from_secs(300)).set("k", "v")?;

        compact_cmd(&home)?
            .arg("--cache-file")
            .arg(&custom)
            .assert()
            .success()
            .stdout(predicate::str::contains("1 entry kept"));

        assert!(!home.cache_file().exists());
        Ok(())
    }
}
