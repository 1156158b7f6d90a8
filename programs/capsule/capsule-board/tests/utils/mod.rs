// Test utilities for the capsule board program

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, AnchorDeserialize, AnchorSerialize};
use capsule_board::{Message, MessageDetails, PostParams, UserStats};
use litesvm::LiteSVM;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(capsule_board::ID.to_bytes());

// Clock sysvar, passed explicitly to time-aware instructions
pub const CLOCK_SYSVAR: Pubkey =
    Pubkey::new_from_array(anchor_lang::solana_program::sysvar::clock::ID.to_bytes());

// PDA Seeds (must match constants.rs)
pub const BOARD: &[u8] = b"board";
pub const MESSAGE: &[u8] = b"message";
pub const DETAILS: &[u8] = b"details";
pub const UPVOTE: &[u8] = b"upvote";
pub const ACTIVITY: &[u8] = b"activity";

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

/// Setup LiteSVM with the capsule board program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../../../target/deploy/capsule_board.so");
    svm.add_program(PROGRAM_ID, program_bytes);
    svm
}

/// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), 10 * LAMPORTS_PER_SOL)
        .expect("Airdrop should succeed");
    keypair
}

/// Convert an SDK pubkey into the program's pubkey type
pub fn to_program_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

pub fn current_slot(svm: &LiteSVM) -> u64 {
    let clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.slot
}

pub fn warp_to(svm: &mut LiteSVM, slot: u64) {
    svm.warp_to_slot(slot);
}

// ======================== PDA DERIVATION ========================

pub fn derive_board_pda(admin: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[BOARD, admin.as_ref()], &PROGRAM_ID).0
}

pub fn derive_message_pda(board: &Pubkey, message_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[MESSAGE, board.as_ref(), &message_id.to_le_bytes()],
        &PROGRAM_ID,
    )
    .0
}

pub fn derive_details_pda(board: &Pubkey, message_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[DETAILS, board.as_ref(), &message_id.to_le_bytes()],
        &PROGRAM_ID,
    )
    .0
}

pub fn derive_upvote_pda(message: &Pubkey, voter: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[UPVOTE, message.as_ref(), voter.as_ref()], &PROGRAM_ID).0
}

pub fn derive_activity_pda(board: &Pubkey, user: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[ACTIVITY, board.as_ref(), user.as_ref()], &PROGRAM_ID).0
}

// ======================== INSTRUCTION BUILDERS ========================

pub fn build_initialize_board_ix(admin: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(derive_board_pda(admin), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("initialize_board").to_vec(),
    }
}

pub fn build_post_message_ix(
    author: &Pubkey,
    board: &Pubkey,
    message_id: u64,
    params: &PostParams,
) -> Instruction {
    let mut data = anchor_discriminator("post_message").to_vec();
    params.serialize(&mut data).expect("params serialize");

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*author, true),
            AccountMeta::new(*board, false),
            AccountMeta::new(derive_message_pda(board, message_id), false),
            AccountMeta::new(derive_details_pda(board, message_id), false),
            AccountMeta::new(derive_activity_pda(board, author), false),
            AccountMeta::new_readonly(CLOCK_SYSVAR, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

fn message_id_data(method: &str, message_id: u64) -> Vec<u8> {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&message_id.to_le_bytes());
    data
}

pub fn build_process_message_ix(claimer: &Pubkey, board: &Pubkey, message_id: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*claimer, true),
            AccountMeta::new_readonly(*board, false),
            AccountMeta::new(derive_message_pda(board, message_id), false),
            AccountMeta::new(derive_activity_pda(board, claimer), false),
            AccountMeta::new_readonly(CLOCK_SYSVAR, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: message_id_data("process_message", message_id),
    }
}

pub fn build_upvote_message_ix(voter: &Pubkey, board: &Pubkey, message_id: u64) -> Instruction {
    let message = derive_message_pda(board, message_id);
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*voter, true),
            AccountMeta::new_readonly(*board, false),
            AccountMeta::new(message, false),
            AccountMeta::new(derive_upvote_pda(&message, voter), false),
            AccountMeta::new(derive_activity_pda(board, voter), false),
            AccountMeta::new_readonly(CLOCK_SYSVAR, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: message_id_data("upvote_message", message_id),
    }
}

pub fn build_report_message_ix(reporter: &Pubkey, board: &Pubkey, message_id: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*reporter, true),
            AccountMeta::new_readonly(*board, false),
            AccountMeta::new(derive_message_pda(board, message_id), false),
        ],
        data: message_id_data("report_message", message_id),
    }
}

pub fn build_disable_message_ix(moderator: &Pubkey, board: &Pubkey, message_id: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*moderator, true),
            AccountMeta::new_readonly(*board, false),
            AccountMeta::new(derive_message_pda(board, message_id), false),
        ],
        data: message_id_data("disable_message", message_id),
    }
}

pub fn build_toggle_pause_ix(admin: &Pubkey, board: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(*board, false),
        ],
        data: anchor_discriminator("toggle_pause").to_vec(),
    }
}

pub fn build_discover_message_ix(caller: &Pubkey, board: &Pubkey, candidate: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*caller, true),
            AccountMeta::new(*board, false),
            AccountMeta::new_readonly(*candidate, false),
            AccountMeta::new_readonly(CLOCK_SYSVAR, false),
        ],
        data: anchor_discriminator("discover_message").to_vec(),
    }
}

pub fn build_get_message_info_ix(board: &Pubkey, message_id: u64) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*board, false),
            AccountMeta::new_readonly(derive_message_pda(board, message_id), false),
            AccountMeta::new_readonly(derive_details_pda(board, message_id), false),
            AccountMeta::new_readonly(CLOCK_SYSVAR, false),
        ],
        data: message_id_data("get_message_info", message_id),
    }
}

pub fn build_get_user_stats_ix(board: &Pubkey, user: &Pubkey) -> Instruction {
    let mut data = anchor_discriminator("get_user_stats").to_vec();
    data.extend_from_slice(user.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*board, false),
            AccountMeta::new_readonly(derive_activity_pda(board, user), false),
        ],
        data,
    }
}

pub fn build_get_total_messages_ix(board: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(*board, false)],
        data: anchor_discriminator("get_total_messages").to_vec(),
    }
}

pub fn build_is_upvoted_ix(board: &Pubkey, message_id: u64, user: &Pubkey) -> Instruction {
    let message = derive_message_pda(board, message_id);
    let mut data = message_id_data("is_message_upvoted_by_user", message_id);
    data.extend_from_slice(user.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*board, false),
            AccountMeta::new_readonly(message, false),
            AccountMeta::new_readonly(derive_upvote_pda(&message, user), false),
        ],
        data,
    }
}

// ======================== TRANSACTION HELPERS ========================

fn signed_tx(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair, signers: &[&Keypair]) -> Transaction {
    // Fresh blockhash so repeated identical instructions get distinct signatures
    svm.expire_blockhash();
    let blockhash = svm.latest_blockhash();
    Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), signers, blockhash)
}

/// Send a transaction, expect success and return the program's return data
pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Vec<u8> {
    let tx = signed_tx(svm, ix, payer, signers);
    let meta = svm.send_transaction(tx).expect("Transaction should succeed");
    meta.return_data.data
}

/// Send a transaction, expect failure and return the error debug string
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    let tx = signed_tx(svm, ix, payer, signers);
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

/// Simulate a read-only instruction and return its return data
pub fn simulate_view(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> Result<Vec<u8>, String> {
    let tx = signed_tx(svm, ix, payer, &[payer]);
    svm.simulate_transaction(tx)
        .map(|info| info.meta.return_data.data)
        .map_err(|failed| format!("{:?}", failed))
}

/// Check an error string for a board error by its custom code
/// The name only labels the failure; runtime errors can share it
pub fn assert_board_error(error: &str, name: &str, code: u32) {
    assert!(
        error.contains(&format!("Custom({})", code)),
        "Expected {} ({}), got: {}",
        name,
        code,
        error
    );
}

// ======================== ACCOUNT READERS ========================

pub fn fetch_message(svm: &LiteSVM, board: &Pubkey, message_id: u64) -> Message {
    let account = svm
        .get_account(&derive_message_pda(board, message_id))
        .expect("message account exists");
    Message::try_deserialize(&mut account.data.as_slice()).expect("message decodes")
}

pub fn fetch_details(svm: &LiteSVM, board: &Pubkey, message_id: u64) -> MessageDetails {
    let account = svm
        .get_account(&derive_details_pda(board, message_id))
        .expect("details account exists");
    MessageDetails::try_deserialize(&mut account.data.as_slice()).expect("details decode")
}

pub fn fetch_board(svm: &LiteSVM, board: &Pubkey) -> capsule_board::Board {
    let account = svm.get_account(board).expect("board account exists");
    capsule_board::Board::try_deserialize(&mut account.data.as_slice()).expect("board decodes")
}

// Return data may come back with trailing zero bytes trimmed
fn padded(data: &[u8], len: usize) -> Vec<u8> {
    let mut bytes = data.to_vec();
    bytes.resize(len.max(data.len()), 0);
    bytes
}

pub fn decode_u64(data: &[u8]) -> u64 {
    let bytes = padded(data, 8);
    u64::from_le_bytes(bytes[..8].try_into().expect("8 bytes of return data"))
}

pub fn decode_bool(data: &[u8]) -> bool {
    data.first().copied() == Some(1)
}

pub fn decode_stats(data: &[u8]) -> UserStats {
    UserStats::deserialize(&mut &padded(data, 24)[..]).expect("stats decode")
}

// ======================== SETUP HELPERS ========================

/// Public text message with the given timeout
pub fn public_params(timeout: u64) -> PostParams {
    PostParams {
        content_hash: "bafkreihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku".to_string(),
        subject: "time capsule".to_string(),
        content: "opened later".to_string(),
        msg_type: 0,
        timeout,
        is_private: 0,
        target_user: None,
        tags: vec!["capsule".to_string(), "test".to_string()],
    }
}

/// Private message readable only by `target`
pub fn private_params(timeout: u64, target: &Pubkey) -> PostParams {
    PostParams {
        is_private: 1,
        target_user: Some(to_program_key(target)),
        ..public_params(timeout)
    }
}

/// Initialize a board for `admin`, returns the board PDA
pub fn create_board(svm: &mut LiteSVM, admin: &Keypair) -> Pubkey {
    let ix = build_initialize_board_ix(&admin.pubkey());
    send_tx_expect_success(svm, ix, admin, &[admin]);
    derive_board_pda(&admin.pubkey())
}

/// Post a message and return its id
pub fn post(svm: &mut LiteSVM, author: &Keypair, board: &Pubkey, params: &PostParams) -> u64 {
    let next_id = fetch_board(svm, board).message_count;
    let ix = build_post_message_ix(&author.pubkey(), board, next_id, params);
    decode_u64(&send_tx_expect_success(svm, ix, author, &[author]))
}
