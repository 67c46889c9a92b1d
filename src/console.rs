use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(value: &str);
}

/// Redirects progress output of the solvers to the browser console.
macro_rules! println {
    ($($t:tt)*) => (crate::console::log(&format_args!($($t)*).to_string()))
}
