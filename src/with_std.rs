
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        borrow,
        cmp,
        convert,
        f64,
        fmt,
        ops,
        ptr,
        str,
        string,
        sync,
        vec,
    };
}
