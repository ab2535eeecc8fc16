use datamask_process::ProcessorRegistry;

fn main() {
    let registry = ProcessorRegistry::new();
    for name in registry.names() {
        println!("{name}");
    }
}
