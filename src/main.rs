//! rBikeshare main entrypoint.

use rbikeshare::run;
use rbikeshare::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
