use rusnewton::multi::{solve, Params};
use rusnewton::objective::QuadraticBowl;

fn main() -> rusnewton::Result<()> {
    let status = solve(&QuadraticBowl::new(), &[1.0, 1.0, 1.0], &Params::new(), None)?;
    println!("{:?}", status.x);
    Ok(())
}
