//! End-to-end console report: rebuild a reference structure from its
//! pair list, validate it, analyze its features, and design a sequence.

use colored::Colorize;
use itertools::Itertools;
use log::info;

use nf_design::PairingPolicy;
use nf_design::design;
use nf_structure::NAIDX;
use nf_structure::analyze;
use nf_structure::diagnose;
use nf_structure::notation_from_pairs;
use nf_structure::validate;

/// 0-based pair list of a 101-nt reference structure.
const REFERENCE_PAIRS: [(NAIDX, NAIDX); 19] = [
    (7, 79), (8, 78), (9, 77), (13, 75), (14, 74), (19, 69), (20, 68),
    (21, 39), (22, 38), (23, 37), (28, 34), (29, 33), (40, 55), (41, 54),
    (45, 51), (46, 50), (57, 65), (58, 64), (59, 63),
];
const REFERENCE_LENGTH: usize = 101;

/// A second, denser structure for the diagnostic pass.
const CHECK_STRUCTURE: &str = ".....(((.(..(.(((((.((((.((...)))).))))((((((...)).))))..(((...)))...))).)..).)))....................";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("{}", "Reference structure".bold());
    let raw = notation_from_pairs(REFERENCE_LENGTH, &REFERENCE_PAIRS);
    println!("{raw}");

    let pairs = validate(&raw)?;
    info!("validated notation: {} pairs over {} positions", pairs.len(), pairs.length());
    println!(
        "pairs: {}",
        pairs.to_vec().iter().map(|p| p.to_string()).join(" ")
    );

    let report = analyze(&raw, &pairs);
    println!();
    println!("{}", "Structural features".bold());
    println!("  total length:   {}", report.total_length);
    println!("  paired bases:   {}", report.paired_bases);
    println!("  unpaired bases: {}", report.unpaired_bases);
    println!("  stems:          {}", report.stems);
    println!("  hairpin loops:  {}", report.hairpin_loops);
    println!("  internal loops: {}", report.internal_loops);
    println!("  bulges:         {}", report.bulges);
    println!("  external loops: {}", report.external_loops);
    println!("  multiloops:     {}", report.multiloops);

    println!();
    println!("{}", "Diagnostic scan".bold());
    println!("{CHECK_STRUCTURE}");
    let diag = diagnose(CHECK_STRUCTURE);
    println!(
        "  length {}, dots {}, opening {}, closing {}",
        diag.length, diag.unpaired, diag.opening, diag.closing
    );
    if diag.is_valid() {
        println!("  {}", "no issues found".green());
    } else {
        for issue in &diag.issues {
            println!("  - {}", issue.to_string().red());
        }
    }

    println!();
    println!("{}", "Designed sequence".bold());
    let policy = PairingPolicy::default();
    let mut rng = rand::rng();
    let seq = design(&pairs, REFERENCE_LENGTH, &policy, &mut rng);
    println!("{seq}");
    println!("  GC content: {:.2}", seq.gc_content());
    println!();
    println!("{}", serde_json::to_string_pretty(&seq.info())?);

    Ok(())
}
