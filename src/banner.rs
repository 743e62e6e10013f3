//! Startup banner.

/// Print the tool banner and usage preamble to stdout.
pub fn print_banner() {
    println!("#######################################");
    println!("#                                     #");
    println!("#    DynamoDB Table Migration Tool    #");
    println!("#                                     #");
    println!("#######################################");
    println!();
    println!("This utility reads JSON files from a directory and creates");
    println!("DynamoDB tables based on the table definitions in the JSON files.");
    println!("Please ensure your AWS credentials are configured.");
    println!("---------------------------------------");
    println!();
}
