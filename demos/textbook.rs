use nw_aligner::{Aligner, FillStrategy, MatrixReport, ScoringScheme, Sequence, Traceback};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let aligner = Aligner::new(ScoringScheme::new(1, -1, -1))
        .with_fill_strategy(FillStrategy::Memoized);

    let s = Sequence::new("GCATGCU");
    let t = Sequence::new("GATTACA");

    let scored = aligner.score(&s, &t)?;
    print!("{}", MatrixReport::new(&scored.matrix, &s, &t));

    let result = Traceback::new(&scored.matrix, &s, &t).reconstruct(aligner.scheme().gap);
    println!("Score: {}", result.score);
    println!("{}", result.aligned_s);
    println!("{}", result.aligned_t);
    println!("Operations: {:?}", result.operations);

    Ok(())
}
