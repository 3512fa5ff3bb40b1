//! rattendance main entrypoint.

use rattendance::run;
use rattendance::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
