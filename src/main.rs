//! weeksheet main entrypoint.

use weeksheet::run;
use weeksheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
