pub mod events;
pub mod join;
pub mod upgrade;

use iconic::Notice;

pub(crate) fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        println!("{notice}");
    }
}
