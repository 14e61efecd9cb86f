use honggfuzz::fuzz;
use schema_assets::{
    prelude::*,
    utils::{generate_identifier_name, hashed_identifier_name},
};

fn main() {
    loop {
        fuzz!(|input: (Vec<String>, String, u16, u8)| {
            let (column_names, postfix, max_size, case_mode) = input;
            if column_names.len() > 64 {
                // Skip excessively wide inputs to avoid timeouts during fuzzing.
                return;
            }

            let max_size = usize::from(max_size);
            let _ = generate_identifier_name(&column_names, &postfix, max_size);
            let _ = hashed_identifier_name(&column_names, &postfix, max_size);

            let mut asset = SchemaAsset::new(postfix);
            let mode = CaseMode::ALL[usize::from(case_mode) % CaseMode::ALL.len()];
            asset.set_case_mode(mode).expect("typed case modes are always valid");
            let _ = asset.fold_identifiers(&column_names);
        });
    }
}
