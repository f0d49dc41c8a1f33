use clap::Parser;
use nw_aligner::{cli::Cli, Aligner, MatrixReport, Sequence, Traceback};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Cli::parse();
    let aligner = Aligner::new(args.scheme()).with_config(args.config())?;

    println!("match: {}", args.match_score);
    println!("mismatch: {}", args.mismatch_score);
    println!("gap: {}", args.gap);

    let s = Sequence::new(&args.s);
    let t = Sequence::new(&args.t);
    let result = aligner.score(&s, &t)?;

    println!(
        "The optimal alignment score between {} and {} is {}",
        s, t, result.score
    );

    if !args.no_matrix {
        println!();
        println!("The completed memo table:");
        println!();
        print!("{}", MatrixReport::new(&result.matrix, &s, &t));
    }

    let alignment = Traceback::new(&result.matrix, &s, &t)
        .with_gap_symbol(aligner.config().gap_symbol)
        .reconstruct(aligner.scheme().gap);

    println!("The aligned strings:");
    println!("{}", alignment.aligned_s);
    println!("{}", alignment.aligned_t);

    Ok(())
}
