// Trunk builds this binary; `wasm_start` runs when the module loads and binds
// the page. Native builds do nothing.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    colorcycle_web::start();
}
