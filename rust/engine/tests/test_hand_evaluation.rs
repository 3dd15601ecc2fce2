use holdem_engine::cards::Card;
use holdem_engine::hand::{compare_hands, evaluate_hand, Category, HandStrength};

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| s.parse().expect("card")).collect()
}

fn eval(list: &[&str]) -> HandStrength {
    evaluate_hand(&cards(list))
}

#[test]
fn detects_royal_flush() {
    let hs = eval(&["10H", "JH", "QH", "KH", "AH", "2C", "3D"]);
    assert_eq!(hs.category, Category::RoyalFlush);
    assert_eq!(hs.name, "Royal Flush");
    assert_eq!(hs.tiebreakers, vec![14, 13, 12, 11, 10]);
}

#[test]
fn quads_report_rank_then_kicker() {
    let hs = eval(&["2C", "2D", "2H", "2S", "KC", "7D", "3H"]);
    assert_eq!(hs.category, Category::FourOfAKind);
    assert_eq!(hs.tiebreakers, vec![2, 13]);
}

#[test]
fn category_ordering_is_correct() {
    let ladder = [
        eval(&["AC", "KD", "9H", "7S", "4C", "3D", "2H"]),
        eval(&["AC", "AD", "9H", "7S", "4C", "3D", "2H"]),
        eval(&["AC", "AD", "9H", "9S", "4C", "3D", "2H"]),
        eval(&["QC", "QH", "QD", "2S", "3C", "4H", "9D"]),
        eval(&["5C", "6H", "7C", "8H", "9D", "2S", "3C"]),
        eval(&["2H", "7H", "JH", "QH", "AH", "3C", "4D"]),
        eval(&["KC", "KD", "KH", "QC", "QD", "2H", "3S"]),
        eval(&["AC", "AD", "AH", "AS", "KC", "QD", "2H"]),
        eval(&["5S", "6S", "7S", "8S", "9S", "2H", "3C"]),
        eval(&["10S", "JS", "QS", "KS", "AS", "2H", "3C"]),
    ];
    let expected = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];
    for (hs, cat) in ladder.iter().zip(expected) {
        assert_eq!(hs.category, cat);
    }
    for pair in ladder.windows(2) {
        assert!(compare_hands(&pair[1], &pair[0]).is_gt());
    }
}

#[test]
fn wheel_ranks_below_six_high_straight() {
    let wheel = eval(&["AC", "2D", "3H", "4S", "5C", "9D", "JH"]);
    let six_high = eval(&["2D", "3H", "4S", "5C", "6D", "9D", "JH"]);
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.tiebreakers, vec![5, 4, 3, 2, 1]);
    assert!(compare_hands(&six_high, &wheel).is_gt());
}

#[test]
fn kickers_break_pair_ties() {
    let ace_kicker = eval(&["KC", "KD", "AH", "7S", "4C", "3D", "2H"]);
    let queen_kicker = eval(&["KH", "KS", "QH", "7D", "4D", "3C", "2S"]);
    assert!(compare_hands(&ace_kicker, &queen_kicker).is_gt());
}

#[test]
fn picks_best_five_of_seven() {
    // Board pair plus pocket pair gives two pair with the best kicker
    let hs = eval(&["9C", "9D", "4H", "4S", "AC", "2D", "3H"]);
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.tiebreakers, vec![9, 4, 14]);
}

#[test]
fn identical_boards_compare_equal() {
    let a = eval(&["2C", "3D", "10H", "JS", "QC", "KD", "AH"]);
    let b = eval(&["2H", "3S", "10H", "JS", "QC", "KD", "AH"]);
    assert!(compare_hands(&a, &b).is_eq());
}

#[test]
fn evaluation_is_deterministic_and_order_independent() {
    let list = ["7C", "7D", "7H", "KS", "KC", "2D", "9H"];
    let forward = eval(&list);
    let mut reversed = list;
    reversed.reverse();
    assert_eq!(forward, eval(&reversed));
    assert_eq!(forward, eval(&list));
    assert_eq!(forward.category, Category::FullHouse);
    assert_eq!(forward.tiebreakers, vec![7, 13]);
}

#[test]
fn fewer_than_five_cards_is_incomplete() {
    let hs = eval(&["AC", "AD", "AH", "AS"]);
    assert_eq!(hs.category, Category::Incomplete);
    assert!(hs.tiebreakers.is_empty());
    assert!(compare_hands(&eval(&["2C", "3D", "4H", "6S", "8C"]), &hs).is_gt());
}

#[test]
fn category_values_span_zero_to_ten() {
    assert_eq!(Category::Incomplete.value(), 0);
    assert_eq!(Category::HighCard.value(), 1);
    assert_eq!(Category::RoyalFlush.value(), 10);
}
