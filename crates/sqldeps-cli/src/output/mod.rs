//! Output formatting

use sqldeps_core::ObjectNameSet;

use crate::args::OutputFormat;

/// Output formatter for extracted object names
pub struct OutputFormatter {
    format: OutputFormat,
    file_name: String,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, file_name: String) -> Self {
        Self { format, file_name }
    }

    /// Print the extracted names in the configured format
    pub fn print_names(&self, names: &ObjectNameSet) {
        match self.format {
            OutputFormat::Human => self.print_human(names),
            OutputFormat::Json => self.print_json(names),
        }
    }

    fn print_human(&self, names: &ObjectNameSet) {
        for name in names.iter() {
            println!("{}", name);
        }
    }

    fn print_json(&self, names: &ObjectNameSet) {
        let output = serde_json::json!({
            "file": self.file_name,
            "objects": names,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    }
}
