use crate::sweep::SweepRow;
use quantum::ExchangeLog;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn write_sweep_csv(path: &str, rows: &[SweepRow]) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "qubits,repeat,trials,chi_square,critical,uniform,fallbacks")?;
    for r in rows {
        writeln!(
            f,
            "{},{},{},{},{},{},{}",
            r.qubits, r.repeat, r.trials, r.chi_square, r.critical, r.uniform, r.fallbacks
        )?;
    }
    f.flush()
}

/// Messages are quoted; embedded quotes are doubled.
pub fn write_exchange_csv(path: &str, log: &ExchangeLog) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "seq,recorded_at_ns,party,trials,leader,message")?;
    for e in log.entries() {
        let leader = e.leader.as_ref().map(|l| l.to_string()).unwrap_or_default();
        writeln!(
            f,
            "{},{},{},{},{},{}",
            e.seq,
            e.recorded_at_ns,
            quote(&e.party),
            e.trials,
            quote(&leader),
            quote(&e.message)
        )?;
    }
    f.flush()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
