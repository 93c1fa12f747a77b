use tagrank::{top_hashtags, Tweet};

fn main() {
    let tweets = vec![
        Tweet::new(135, 13, "Enjoying a great start to the day. #HappyDay #MorningVibes", "2024-02-01"),
        Tweet::new(136, 14, "Another #HappyDay with good vibes! #FeelGood", "2024-02-03"),
        Tweet::new(137, 15, "Productivity peaks! #WorkLife #ProductiveDay", "2024-02-04"),
        Tweet::new(138, 16, "Exploring new tech frontiers. #TechLife #Innovation", "2024-02-04"),
        Tweet::new(139, 17, "Gratitude for today’s moments. #HappyDay #Thankful", "2024-02-05"),
        Tweet::new(140, 18, "Innovation drives us. #TechLife #FutureTech", "2024-02-07"),
        Tweet::new(141, 19, "Connecting with nature’s serenity. #Nature #Peaceful", "2024-02-09"),
    ];

    let top = top_hashtags(&tweets).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    for tc in top {
        println!("{} {}", tc.tag, tc.count);
    }
}
