use crate::cli::args::Cli;
use crate::core::composition::Composition;
use crate::core::error::LoadError;
use crate::core::{fasta, kmer, window};
use crate::report;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::env;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const PROMPT: &str = "Enter FASTA filename: ";

pub fn entry() -> Result<ExitCode> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run<W: Write>(args: Cli, out: &mut W) -> Result<ExitCode> {
    let stats = stats_enabled();
    let t0 = Instant::now();

    let t_path = Instant::now();
    let input = match args.input {
        Some(p) => p,
        None => {
            let stdin = io::stdin();
            read_path(&mut stdin.lock(), out)?
        }
    };
    stage_done(stats, "input-path", t_path);

    let limit = usize::try_from(args.max_len).unwrap_or(usize::MAX);

    let t_load = Instant::now();
    let loaded = match fasta::load(&input, limit) {
        Ok(loaded) => loaded,
        Err(e @ LoadError::Open { .. }) => {
            // Open failures are reported on stdout, with nothing else printed.
            writeln!(out, "Error: {:#}", anyhow::Error::from(e))?;
            out.flush()?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };
    stage_done(stats, "load", t_load);

    let t_comp = Instant::now();
    let comp = Composition::from_seq(&loaded.seq);
    stage_done(stats, "composition", t_comp);
    if stats {
        eprintln!(
            "KIRA_STATS input={} kind={:?} bytes={} lines={} headers={} seq_len={}",
            input.display(),
            loaded.kind,
            loaded.stats.input_bytes,
            loaded.stats.lines,
            loaded.stats.headers,
            comp.total()
        );
    }

    let mut w = BufWriter::new(&mut *out);
    report::composition_txt::write(&mut w, &comp).context("failed to write report")?;

    if let Some(k) = args.kmer {
        let t_kmer = Instant::now();
        let k = k as usize;
        let rows = kmer::percentages(&loaded.seq, k);
        report::kmer_txt::write(&mut w, k, &rows).context("failed to write k-mer report")?;
        stage_done(stats, "kmer", t_kmer);
    }

    if let Some(size) = args.window {
        let t_window = Instant::now();
        let size = size as usize;
        let rows = window::sliding_frequencies(&loaded.seq, size);
        report::window_tsv::write(&mut w, size, &rows)
            .context("failed to write sliding window report")?;
        stage_done(stats, "window", t_window);
    }

    w.flush().context("failed to flush stdout")?;

    if stats {
        eprintln!("KIRA_STATS total={}", fmt_dur(t0.elapsed()));
    }
    Ok(ExitCode::SUCCESS)
}

/// Prompts on `out` and takes one line from `input` as the path.
fn read_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PathBuf> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .context("failed to read input path from stdin")?;
    let path = fasta::strip_terminator(&line);
    if path.is_empty() {
        bail!("no input file given");
    }
    Ok(path_from_bytes(path))
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(OsString::from_vec(bytes.to_vec()))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

fn stats_enabled() -> bool {
    matches!(env::var("KIRA_STATS").as_deref(), Ok("1"))
}

fn stage_done(stats: bool, name: &str, t: Instant) {
    if stats {
        eprintln!("KIRA_STATS stage={} time={}", name, fmt_dur(t.elapsed()));
    }
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}
