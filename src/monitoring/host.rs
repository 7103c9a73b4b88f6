/*!
 * Host Monitors
 * Procfs-backed collector for Linux plus a constant-value stand-in
 */

use super::traits::HostMonitor;
use super::types::{DiskUsage, HostMemoryStats, ProcessSample, SwapStats, SystemInfo};
use std::path::Path;

/// Constant-value monitor: the documented fallbacks on every call
///
/// Stands in on platforms without procfs and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMonitor;

impl HostMonitor for StaticMonitor {
    fn memory_stats(&self) -> HostMemoryStats {
        HostMemoryStats::fallback()
    }

    fn swap_stats(&self) -> SwapStats {
        SwapStats::fallback()
    }

    fn system_info(&self) -> SystemInfo {
        SystemInfo::fallback()
    }

    fn top_processes(&self, _limit: usize) -> Vec<ProcessSample> {
        Vec::new()
    }

    fn disk_usage(&self, _path: &Path) -> DiskUsage {
        DiskUsage::fallback()
    }
}

#[cfg(target_os = "linux")]
pub use procfs::ProcfsMonitor;

#[cfg(target_os = "linux")]
mod procfs {
    use super::super::traits::HostMonitor;
    use super::super::types::{
        DiskUsage, HostMemoryStats, ProcessSample, SwapStats, SystemInfo,
    };
    use crate::core::limits::{PROCESSOR_NAME_DISPLAY_MAX, PROCESS_NAME_DISPLAY_MAX};
    use log::warn;
    use std::collections::HashSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Kernel-exported clock tick rate; fixed at 100 on Linux
    const USER_HZ: f64 = 100.0;

    /// Page size assumed when converting statm resident pages to bytes
    const PAGE_SIZE_BYTES: u64 = 4096;

    /// Procfs-backed host monitor
    ///
    /// Reads `/proc` directly; any read or parse failure degrades to the
    /// documented fallback for that call.
    #[derive(Debug, Clone)]
    pub struct ProcfsMonitor {
        proc_root: PathBuf,
    }

    impl ProcfsMonitor {
        pub fn new() -> Self {
            Self {
                proc_root: PathBuf::from("/proc"),
            }
        }

        /// Monitor over an alternate procfs mount (containers, tests)
        pub fn with_root(root: impl Into<PathBuf>) -> Self {
            Self {
                proc_root: root.into(),
            }
        }

        fn read(&self, relative: &str) -> Option<String> {
            fs::read_to_string(self.proc_root.join(relative)).ok()
        }

        fn sample_process(&self, pid: u32, uptime_secs: Option<f64>) -> Option<ProcessSample> {
            let comm = self.read(&format!("{}/comm", pid))?;
            let statm = self.read(&format!("{}/statm", pid))?;
            let resident_pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
            let cpu_percent = uptime_secs
                .and_then(|uptime| self.process_cpu_percent(pid, uptime))
                .unwrap_or(0.0);
            Some(ProcessSample {
                pid,
                name: truncate_display(comm.trim(), PROCESS_NAME_DISPLAY_MAX),
                memory_mb: (resident_pages * PAGE_SIZE_BYTES) as f64 / (1024.0 * 1024.0),
                cpu_percent,
            })
        }

        /// Share of the process's lifetime spent on-CPU
        fn process_cpu_percent(&self, pid: u32, uptime_secs: f64) -> Option<f64> {
            let stat = self.read(&format!("{}/stat", pid))?;
            // Fields after the parenthesized comm; comm may contain spaces.
            let rest = stat.rsplit_once(')')?.1;
            let fields: Vec<&str> = rest.split_whitespace().collect();
            let utime: u64 = fields.get(11)?.parse().ok()?;
            let stime: u64 = fields.get(12)?.parse().ok()?;
            let starttime: u64 = fields.get(19)?.parse().ok()?;
            let age_secs = uptime_secs - starttime as f64 / USER_HZ;
            if age_secs <= 0.0 {
                return None;
            }
            Some(100.0 * ((utime + stime) as f64 / USER_HZ) / age_secs)
        }
    }

    impl Default for ProcfsMonitor {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HostMonitor for ProcfsMonitor {
        fn memory_stats(&self) -> HostMemoryStats {
            let Some(meminfo) = self.read("meminfo") else {
                warn!("meminfo unavailable, reporting fallback memory stats");
                return HostMemoryStats::fallback();
            };
            let (Some(total), Some(available)) = (
                meminfo_field(&meminfo, "MemTotal"),
                meminfo_field(&meminfo, "MemAvailable"),
            ) else {
                warn!("meminfo unparsable, reporting fallback memory stats");
                return HostMemoryStats::fallback();
            };
            HostMemoryStats {
                total,
                used: total.saturating_sub(available),
                available,
                buffers: meminfo_field(&meminfo, "Buffers").unwrap_or(0),
                cached: meminfo_field(&meminfo, "Cached").unwrap_or(0),
            }
        }

        fn swap_stats(&self) -> SwapStats {
            let Some(meminfo) = self.read("meminfo") else {
                return SwapStats::fallback();
            };
            let (Some(total), Some(free)) = (
                meminfo_field(&meminfo, "SwapTotal"),
                meminfo_field(&meminfo, "SwapFree"),
            ) else {
                return SwapStats::fallback();
            };
            SwapStats {
                total,
                used: total.saturating_sub(free),
                free,
            }
        }

        fn system_info(&self) -> SystemInfo {
            let fallback = SystemInfo::fallback();
            let stat = self.read("stat");
            let cpuinfo = self.read("cpuinfo");

            SystemInfo {
                os_name: match self.read("sys/kernel/osrelease") {
                    Some(release) => {
                        format!("{} {}", std::env::consts::OS, release.trim())
                    }
                    None => fallback.os_name,
                },
                architecture: std::env::consts::ARCH.to_string(),
                processor: cpuinfo
                    .as_deref()
                    .and_then(processor_model)
                    .unwrap_or(fallback.processor),
                core_count: cpuinfo
                    .as_deref()
                    .and_then(physical_cores)
                    .unwrap_or(fallback.core_count),
                logical_cpu_count: stat
                    .as_deref()
                    .map(logical_cpus)
                    .filter(|&count| count > 0)
                    .unwrap_or(fallback.logical_cpu_count),
                cpu_usage_percent: stat
                    .as_deref()
                    .and_then(cpu_usage_percent)
                    .unwrap_or(fallback.cpu_usage_percent),
            }
        }

        fn top_processes(&self, limit: usize) -> Vec<ProcessSample> {
            let mut samples = Vec::new();
            let Ok(entries) = fs::read_dir(&self.proc_root) else {
                warn!("proc root unreadable, reporting empty process list");
                return samples;
            };
            let uptime_secs = self.read("uptime").and_then(|content| {
                content
                    .split_whitespace()
                    .next()
                    .and_then(|value| value.parse::<f64>().ok())
            });

            for entry in entries.flatten() {
                let file_name = entry.file_name();
                let Some(pid) = file_name
                    .to_str()
                    .and_then(|name| name.parse::<u32>().ok())
                else {
                    continue;
                };
                // Processes that vanish mid-scan are simply skipped.
                if let Some(sample) = self.sample_process(pid, uptime_secs) {
                    samples.push(sample);
                }
            }

            samples.sort_by(|a, b| {
                b.memory_mb
                    .partial_cmp(&a.memory_mb)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            samples.truncate(limit);
            samples
        }

        fn disk_usage(&self, path: &Path) -> DiskUsage {
            match nix::sys::statvfs::statvfs(path) {
                Ok(stats) => {
                    let fragment = stats.fragment_size() as u64;
                    let total = stats.blocks() as u64 * fragment;
                    let free = stats.blocks_available() as u64 * fragment;
                    let used = total.saturating_sub(stats.blocks_free() as u64 * fragment);
                    let percent = if total > 0 {
                        100.0 * used as f64 / total as f64
                    } else {
                        0.0
                    };
                    DiskUsage {
                        total,
                        used,
                        free,
                        percent,
                    }
                }
                Err(_) => DiskUsage::fallback(),
            }
        }
    }

    /// Value of a `Key:   <n> kB` meminfo line, in bytes
    fn meminfo_field(meminfo: &str, key: &str) -> Option<u64> {
        meminfo.lines().find_map(|line| {
            let rest = line.strip_prefix(key)?.strip_prefix(':')?;
            let kb: u64 = rest.split_whitespace().next()?.parse().ok()?;
            Some(kb * 1024)
        })
    }

    /// Aggregate CPU busy share since boot, from the first `/proc/stat` line
    fn cpu_usage_percent(stat: &str) -> Option<f64> {
        let line = stat.lines().next()?;
        let rest = line.strip_prefix("cpu ")?;
        let values: Vec<u64> = rest
            .split_whitespace()
            .filter_map(|value| value.parse().ok())
            .collect();
        if values.len() < 5 {
            return None;
        }
        let total: u64 = values.iter().sum();
        if total == 0 {
            return None;
        }
        let idle = values[3] + values[4];
        Some(100.0 * (total - idle) as f64 / total as f64)
    }

    /// Number of `cpuN` lines in `/proc/stat`
    fn logical_cpus(stat: &str) -> usize {
        stat.lines()
            .filter(|line| {
                line.strip_prefix("cpu")
                    .and_then(|rest| rest.chars().next())
                    .is_some_and(|c| c.is_ascii_digit())
            })
            .count()
    }

    /// Distinct (physical id, core id) pairs in `/proc/cpuinfo`
    fn physical_cores(cpuinfo: &str) -> Option<usize> {
        let mut pairs = HashSet::new();
        let mut physical_id: Option<u32> = None;
        let mut core_id: Option<u32> = None;

        for line in cpuinfo.lines() {
            if line.trim().is_empty() {
                if let (Some(physical), Some(core)) = (physical_id, core_id) {
                    pairs.insert((physical, core));
                }
                physical_id = None;
                core_id = None;
            } else if let Some(value) = cpuinfo_value(line, "physical id") {
                physical_id = value.parse().ok();
            } else if let Some(value) = cpuinfo_value(line, "core id") {
                core_id = value.parse().ok();
            }
        }
        if let (Some(physical), Some(core)) = (physical_id, core_id) {
            pairs.insert((physical, core));
        }

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.len())
        }
    }

    fn processor_model(cpuinfo: &str) -> Option<String> {
        cpuinfo
            .lines()
            .find_map(|line| cpuinfo_value(line, "model name"))
            .map(|model| truncate_display(model, PROCESSOR_NAME_DISPLAY_MAX))
    }

    fn cpuinfo_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
        let rest = line.strip_prefix(key)?.trim_start().strip_prefix(':')?;
        Some(rest.trim())
    }

    fn truncate_display(value: &str, max: usize) -> String {
        value.chars().take(max).collect()
    }

}
