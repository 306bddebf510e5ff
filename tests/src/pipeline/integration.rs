#![cfg(all(test, unix))]

use std::net::Ipv4Addr;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use async_trait::async_trait;
use edgesift_common::network::range::CidrRange;
use edgesift_core::exec::{ExecError, ToolCommand, ToolOutput, ToolRunner};
use edgesift_core::{convert, extract, latency, scan};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("edgesift-it-{name}-{}", std::process::id()))
}

fn exit(code: i32) -> ExitStatus {
    ExitStatus::from_raw(code << 8)
}

fn string_args(cmd: &ToolCommand) -> Vec<String> {
    cmd.arguments()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

/// Stands in for the port scanner: writes a canned `-oL` listing to
/// whatever output path the command names.
struct CannedScanner {
    listing: &'static str,
}

#[async_trait]
impl ToolRunner for CannedScanner {
    async fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput, ExecError> {
        let args = string_args(cmd);
        let pos = args
            .iter()
            .position(|a| a == "-oL")
            .expect("scanner invoked without -oL");
        std::fs::write(Path::new(&args[pos + 1]), self.listing).unwrap();
        Ok(ToolOutput {
            status: exit(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

/// Stands in for the latency tester: reads the `-f` endpoint list and
/// writes a ranked CSV (reverse input order) to the `-o` path.
struct CannedTester;

#[async_trait]
impl ToolRunner for CannedTester {
    async fn run(&self, cmd: &ToolCommand) -> Result<ToolOutput, ExecError> {
        let args = string_args(cmd);
        let list_pos = args.iter().position(|a| a == "-f").unwrap();
        let csv_pos = args.iter().position(|a| a == "-o").unwrap();

        let endpoints = std::fs::read_to_string(Path::new(&args[list_pos + 1])).unwrap();
        let mut csv = String::from("IP,Sent,Received,Loss,Latency\n");
        for (i, ep) in endpoints.lines().rev().enumerate() {
            csv.push_str(&format!("{ep},4,4,0.00,{}\n", 10 + i));
        }
        std::fs::write(Path::new(&args[csv_pos + 1]), csv).unwrap();

        Ok(ToolOutput {
            status: exit(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

struct FailingRunner {
    stderr: &'static str,
}

#[async_trait]
impl ToolRunner for FailingRunner {
    async fn run(&self, _cmd: &ToolCommand) -> Result<ToolOutput, ExecError> {
        Ok(ToolOutput {
            status: exit(1),
            stdout: String::new(),
            stderr: self.stderr.to_string(),
        })
    }
}

const LISTING: &str = "\
#masscan
open tcp 443 203.0.113.5 1690000000
closed tcp 80 203.0.113.6 1690000001
open tcp 8443 198.51.100.9 1690000002
# end
";

#[tokio::test]
async fn scan_and_convert_produce_ordered_endpoints() {
    let scan_out = scratch("scan.txt");
    let list_out = scratch("list.txt");
    let ranges = vec![CidrRange::new(Ipv4Addr::new(203, 0, 113, 0), 24)];

    scan::run_scan(&CannedScanner { listing: LISTING }, &ranges, &scan_out, 1000)
        .await
        .unwrap();
    let count = convert::convert_scan_results(&scan_out, &list_out).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        std::fs::read_to_string(&list_out).unwrap(),
        "203.0.113.5:443\n198.51.100.9:8443\n"
    );

    std::fs::remove_file(&scan_out).unwrap();
    std::fs::remove_file(&list_out).unwrap();
}

#[tokio::test]
async fn latency_and_extract_yield_ranked_list() {
    let tool_dir = scratch("tool");
    std::fs::create_dir_all(&tool_dir).unwrap();
    let tool = tool_dir.join("tester");

    let list = scratch("endpoints.txt");
    let csv = scratch("ranked.csv");
    let final_out = scratch("final.txt");
    std::fs::write(&list, "203.0.113.5:443\n198.51.100.9:8443\n").unwrap();

    latency::run_latency_test(&CannedTester, &tool, &list, &csv)
        .await
        .unwrap();
    let count = extract::extract_results(&csv, &final_out).unwrap();

    // The canned tester ranks in reverse input order; extraction must
    // preserve that ranking and drop the header.
    assert_eq!(count, 2);
    assert_eq!(
        std::fs::read_to_string(&final_out).unwrap(),
        "198.51.100.9:8443\n203.0.113.5:443\n"
    );

    std::fs::remove_dir_all(&tool_dir).unwrap();
    for p in [&list, &csv, &final_out] {
        std::fs::remove_file(p).unwrap();
    }
}

#[tokio::test]
async fn scanner_failure_surfaces_stderr() {
    let ranges = vec![CidrRange::new(Ipv4Addr::new(203, 0, 113, 0), 24)];
    let err = scan::run_scan(
        &FailingRunner {
            stderr: "FAIL: permission denied",
        },
        &ranges,
        &scratch("never-written.txt"),
        1000,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("permission denied"));
}
