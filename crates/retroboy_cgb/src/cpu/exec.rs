//! Instruction handlers for the unprefixed opcode blocks.
//!
//! Handlers receive the operand fields the decoder extracted and charge
//! cycles only through bus accesses plus explicit idle cycles.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
