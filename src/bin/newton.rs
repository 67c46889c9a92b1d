use rusnewton::newton::{solve, Params};
use rusnewton::objective::Cosine;

fn main() -> rusnewton::Result<()> {
    let params = Params::new().with_verbose(1);
    let status = solve(&Cosine, 1.0, &params, None)?;
    println!("result {}", status.x);
    Ok(())
}
