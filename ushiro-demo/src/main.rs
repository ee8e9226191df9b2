use ushiro_core::{Humanizer, Levels, Lexicon};

const SAMPLES: &[&str] = &[
    "本日は資料を提供いたします。ご確認ください。",
    "会議を開始します。重要な点を説明します。",
    "誠に申し訳ございません。少々お待ちください。",
    "しかしながら、迅速に対応することは難しいと思います。",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Built-in lexicon, fillers, endings and repair rules
    let humanizer = Humanizer::builtin()?;
    println!("Lexicon entries: {}", humanizer.tables().lexicon.len());
    println!("Repair rules: {}", humanizer.tables().repairs.len());

    // Levels are not clamped, anything above 1.0 just means "always"
    let settings = [
        ("untouched", Levels::new(0.0, 0.0)),
        ("default", Levels::default()),
        ("casual", Levels::new(0.5, 1.0)),
        ("chatty", Levels::new(10.0, 1.0)),
    ];

    for text in SAMPLES {
        println!("\n{text}");
        for (name, levels) in &settings {
            println!("  {name:>9}: {}", humanizer.humanize(text, levels));
        }
    }

    // Without any lexicon only endings, fillers and repairs are left
    let bare = Humanizer::from_lexicon(Lexicon::empty())?;
    println!("\nEmpty lexicon: {}", bare.humanize(SAMPLES[0], &Levels::new(0.0, 1.0)));

    Ok(())
}
