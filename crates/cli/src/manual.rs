//! The in-app notation manual.

pub fn print_rules() {
    println!("In order to move a piece, please write the move in algebraic notation.");
    println!("Here are some things to remember:");
    println!();
    println!("1. Piece notations:");
    println!();
    println!("Piece    Code");
    println!("King     K");
    println!("Queen    Q");
    println!("Rook     R");
    println!("Bishop   B");
    println!("Knight   N");
    println!("Pawn     No letter");
    println!();
    println!("2. Square notations:");
    println!();
    println!("The ranks are noted from 1 through 8");
    println!("The files are noted from a through h");
    println!();
    println!("3. Move notation:");
    println!("In order to write a valid move, concatenate the piece notation");
    println!("with the destination square.");
    println!();
    println!("Examples:");
    println!("e4  - Pawn to e4");
    println!("Nf3 - Knight to f3");
    println!("Qg8 - Queen to g8");
    println!();
    println!("4. Optional notations (you do not need to write these):");
    println!();
    println!("4.1 A capture may carry an 'x' between piece and square.");
    println!("Examples: Bxc6 (bishop takes on c6), Qxh2 (queen takes on h2)");
    println!();
    println!("4.2 A move that gives check may end with '+'.");
    println!("Examples: Nf7+, h6+, Qxh7+");
    println!();
    println!("4.3 A move that delivers checkmate may end with '#'.");
    println!("Examples: Qb8#, Ra2#");
    println!();
    println!("When several pieces of the same kind could reach the square,");
    println!("the engine moves the first one it finds; disambiguation");
    println!("prefixes, castling and en passant are not supported yet.");
}
