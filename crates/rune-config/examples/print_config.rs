/// Example program to print the loaded configuration
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    let config = rune_config::RuneConfig::load();

    println!("=== Rune Configuration ===\n");

    println!("Text Settings:");
    println!("  Font: {}", config.text.font);
    println!("  Scale: {}", config.text.scale);
    println!("  Text Align: {:?}", config.text.text_align);
    println!("  Box Align: {:?}", config.text.box_align);
    println!();

    println!("Multiline Settings:");
    println!("  Selectable: {}", config.multiline.selectable);
    println!("  Editable: {}", config.multiline.editable);
    println!("  Show Scrollbar: {}", config.multiline.show_scrollbar);
    println!("  Scrollbar Width: {}", config.multiline.scrollbar_width);
    println!("  Repeat Delay: {:?}", config.multiline.repeat_delay());
    println!("  Scroll Sensitivity: {}", config.multiline.scroll_sensitivity);
    println!("  Caret Blink: {:?}", config.multiline.caret_blink());
}
