/// Port for reading raw configuration values by variable name.
pub trait EnvSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

impl EnvSource for std::collections::HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        std::collections::HashMap::get(self, name).cloned()
    }
}
