//! Runnable demo: `cargo run --example confirm`

use m3_dialog::{show, DialogRequest};

fn main() {
    let request = DialogRequest::new()
        .title("Apply easing fix")
        .message(
            "Removes the bounce and lets the dialog grow smoothly to its \
             target size before coming to rest.",
        )
        .confirm_label("OK")
        .cancel_label("Cancel");

    match show(request) {
        Ok(true) => println!("confirmed"),
        Ok(false) => println!("cancelled"),
        Err(error) => eprintln!("dialog error: {error}"),
    }
}
