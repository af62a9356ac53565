use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::api::{generate, GeneratorOptions, Puzzle};
use crate::format::format_grid;
use crate::trie::PrefixTrie;
use crate::dictionary::DICTIONARY_MIN_LENGTH;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WasmPuzzle {
    puzzle: Puzzle,
    grid_text: String,
    answer_key_text: String,
}

fn words_from_js(value: JsValue) -> Result<Vec<String>, JsValue> {
    from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Words must be an array of strings: {e}")))
}

fn options_from_js(value: JsValue) -> Result<GeneratorOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(GeneratorOptions::default());
    }
    from_value(value).map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))
}

/// WebAssembly entry point: build a word search. `dictionary` is an optional
/// newline-separated word list used to scrub accidental words.
#[wasm_bindgen]
pub fn generate_puzzle(
    words: JsValue,
    options: JsValue,
    dictionary: Option<String>,
) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let options = options_from_js(options)?;
    let trie = dictionary.map(|text| {
        let mut trie = PrefixTrie::new();
        trie.extend_from_text(&text, DICTIONARY_MIN_LENGTH);
        trie
    });

    let puzzle =
        generate(&words, &options, trie.as_ref()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let out = WasmPuzzle {
        grid_text: format_grid(&puzzle.grid),
        answer_key_text: format_grid(&puzzle.answer_key),
        puzzle,
    };
    to_value(&out).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
