#[derive(Debug, Clone, Copy)]
pub struct PawnTableConfig {
    // Table size in megabytes
    pub hash_mb: usize,
}

impl Default for PawnTableConfig {
    fn default() -> Self {
        Self { hash_mb: 16 }
    }
}

impl PawnTableConfig {
    pub fn update(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name {
            "PawnHash" => {
                let mb = value
                    .parse::<usize>()
                    .map_err(|e| format!("Invalid value '{}' for {}: {}", value, name, e))?;
                if mb == 0 {
                    return Err(format!("{} must be at least 1 MB", name));
                }
                self.hash_mb = mb;
                Ok(())
            }
            _ => Err(format!("Unknown parameter: {}", name)),
        }
    }
}
