//! The ordered rule table.
//!
//! Order matters: the first matching rule wins, so specific rules come
//! before the generic ones they overlap with.

use super::rule::RuleSpec;

macro_rules! doc {
    ($path:literal) => {
        concat!("https://en.cppreference.com/w/cpp", $path)
    };
}

/// Every rule, in matching order.
pub const RULES: &[RuleSpec] = &[
    // ==========================================================================
    // PREPROCESSOR & HEADERS
    // ==========================================================================
    RuleSpec {
        pattern: r"#include\s*<bits/stdc\+\+\.h>",
        summary: "COMPETITIVE CODING HEADER: Importing absolutely everything in C++.",
        detail: "CONCEPT: This is a 'convenience header' often used in competitive programming. It includes every standard library file (vectors, strings, algorithms, IO, etc.) in one go. \n\nPROS: You don't have to remember specific includes. \nCONS: It increases compile time significantly and isn't standard in all compilers. Avoid this in professional software engineering.",
        url: doc!("/header"),
    },
    RuleSpec {
        pattern: r"#include\s*<(.*)>",
        summary: "HEADER IMPORT: Fetching the toolset <{}>.",
        detail: "CONCEPT: Think of this like opening a toolbox. C++ is lean; it doesn't load everything by default. <iostream> gives you input/output tools, <vector> gives you dynamic arrays, and <algorithm> gives you sorting/searching functions. The preprocessor literally copies that file into your code before compiling.",
        url: doc!("/header"),
    },
    RuleSpec {
        pattern: r"using\s+namespace\s+std;",
        summary: "NAMESPACE DIRECTIVE: Unlocking the 'std' label.",
        detail: "CONCEPT: Without this, you have to type 'std::cout' or 'std::vector'. This line tells the compiler, 'If you don't recognize a name, check the standard (std) library.' \n\nWARNING: In large projects, this is dangerous because if you name a variable 'count', it might clash with 'std::count'.",
        url: doc!("/language/namespace"),
    },
    // ==========================================================================
    // DATA TYPES & VARIABLES
    // ==========================================================================
    RuleSpec {
        pattern: r"\b(const)\s+",
        summary: "CONSTANT: Making a value unchangeable.",
        detail: "CONCEPT: 'const' is a promise that this variable will never change after it is created. It helps prevent bugs and lets the compiler optimize your code (e.g., putting it in read-only memory).",
        url: doc!("/language/cv"),
    },
    // Placeholders name groups by number: '{2}' here is the variable, not the
    // type. The array rules below rely on the same numbering.
    RuleSpec {
        pattern: r"\b(int|long long)\s+(\w+)",
        summary: "INTEGER DECLARATION: Creating a whole number variable '{2}'.",
        detail: "CONCEPT: 'int' is the standard integer size (usually 32-bit, up to ~2 billion). Use 'long long' if you need massive numbers (64-bit, up to ~9 quintillion). If you try to store 2.5 inside an int, the .5 gets chopped off instantly.",
        url: doc!("/language/types"),
    },
    RuleSpec {
        pattern: r"\b(float|double)\s+(\w+)",
        summary: "DECIMAL DECLARATION: Creating a precise number variable '{2}'.",
        detail: "CONCEPT: 'double' (double precision) is the standard for decimals. 'float' saves memory but is less precise. Be careful: computers can't store decimals perfectly (e.g., 0.1 + 0.2 might equal 0.300000004).",
        url: doc!("/language/types"),
    },
    RuleSpec {
        pattern: r"\b(char)\s+(\w+)",
        summary: "CHARACTER: Storing a single symbol '{2}'.",
        detail: "CONCEPT: Computers only understand numbers. A 'char' actually stores a small integer (ASCII code) that represents a letter. For example, 'A' is stored as 65.",
        url: doc!("/language/types"),
    },
    RuleSpec {
        pattern: r"\b(bool)\s+(\w+)",
        summary: "BOOLEAN: A simple switch (True/False).",
        detail: "CONCEPT: The smallest unit of logic. Internally, C++ often treats 'false' as 0 and 'true' as 1 (or anything non-zero). Used heavily in 'if' statements.",
        url: doc!("/language/types"),
    },
    RuleSpec {
        pattern: r"\b(string)\s+(\w+)",
        summary: "STRING: A text variable '{2}'.",
        detail: "CONCEPT: Unlike 'char' (which is one letter), 'string' is a dynamic chain of characters. It handles memory management for you, so you can resize it, add to it (+), or search inside it easily.",
        url: doc!("/string/basic_string"),
    },
    // ==========================================================================
    // ARRAYS
    // ==========================================================================
    RuleSpec {
        pattern: r"(\w+)\s+(\w+)\[(\d+)\]\s*;",
        summary: "ARRAY DECLARATION: Creating a fixed-size list named '{2}' that holds {3} items of type '{1}'.",
        detail: "DETAILED: An array is a collection of items stored in contiguous memory. Once you set the size (here, {3}), it cannot be changed. All items in the array must be of the same type.",
        url: doc!("/language/array"),
    },
    RuleSpec {
        pattern: r"(\w+)\s+(\w+)\[\]\s*=\s*\{(.*)\}",
        summary: "ARRAY INITIALIZATION: Creating an array '{2}' and filling it with: {{ {3} }}.",
        detail: "DETAILED: When you initialize an array with {{ }}, C++ automatically counts the items to determine the array's size for you.",
        url: doc!("/language/array#Initialization"),
    },
    RuleSpec {
        pattern: r"(\w+)\[(.*)\]",
        summary: "ARRAY ACCESS: Accessing the item at position (index) '{2}' in array '{1}'.",
        detail: "DETAILED: C++ uses **Zero-Based Indexing**. This means the first element is at [0], the second at [1], and so on. Be careful: accessing an index outside the array size will crash your program or cause 'Undefined Behavior'.",
        url: doc!("/language/array#Usage"),
    },
    // ==========================================================================
    // MEMORY (POINTERS, REFS, DYNAMIC)
    // ==========================================================================
    RuleSpec {
        pattern: r"(\w+)\s*\*\s*(\w+)\s*=",
        summary: "POINTER DECLARATION: '{2}' stores a memory address, not a value.",
        detail: "CONCEPT: A pointer is a map coordinate. If 'int x = 10' is a house with 10 people, 'int* p = &x' is a piece of paper with the house's address written on it. You use pointers for dynamic memory and efficient array handling.",
        url: doc!("/language/pointer"),
    },
    RuleSpec {
        pattern: r"(\w+)\s*&\s*(\w+)\s*=",
        summary: "REFERENCE: '{2}' is an alias (nickname) for another variable.",
        detail: "CONCEPT: A reference is NOT a copy. It is a permanent link to the original variable. If you change the reference, you change the original. It's safer and easier to read than pointers.",
        url: doc!("/language/reference"),
    },
    RuleSpec {
        pattern: r"new\s+(\w+)",
        summary: "DYNAMIC ALLOCATION: Manually requesting memory on the Heap.",
        detail: "CONCEPT: Standard variables live on the 'Stack' and die automatically. 'new' creates data on the 'Heap' that stays alive until you explicitly kill it. Use this for objects that need to survive across different functions.",
        url: doc!("/language/new"),
    },
    RuleSpec {
        pattern: r"delete\s+(\w+)",
        summary: "MEMORY CLEANUP: Returning borrowed memory to the system.",
        detail: "CONCEPT: C++ does not have a Garbage Collector. If you used 'new', you MUST use 'delete'. If you forget, your program will consume more and more RAM (a Memory Leak) until it crashes.",
        url: doc!("/language/delete"),
    },
    // ==========================================================================
    // STL & DATA STRUCTURES
    // ==========================================================================
    RuleSpec {
        pattern: r"vector\s*<\s*(\w+)\s*>",
        summary: "STL VECTOR: A dynamic, resizeable array of type '{}'.",
        detail: "CONCEPT: Standard arrays are fixed size. A vector is flexible. If it gets full, it automatically finds a larger memory space, copies itself over, and deletes the old one. It is the go-to list structure in C++.",
        url: doc!("/container/vector"),
    },
    RuleSpec {
        pattern: r"map\s*<\s*(\w+)\s*,\s*(\w+)\s*>",
        summary: "STL MAP: A dictionary linking keys ({}) to values ({}).",
        detail: "CONCEPT: Maps store pairs. You look up data by a 'Key' instead of an index. It's usually implemented as a Red-Black Tree, meaning lookups are very fast (O(log n)) and the data is always sorted by the Key.",
        url: doc!("/container/map"),
    },
    RuleSpec {
        pattern: r"set\s*<\s*(\w+)\s*>",
        summary: "STL SET: A collection of unique '{}' items.",
        detail: "CONCEPT: Sets automatically sort your data and remove duplicates. If you try to insert the same number twice, the set ignores the second one. Great for filtering unique elements.",
        url: doc!("/container/set"),
    },
    RuleSpec {
        pattern: r"struct\s+(\w+)",
        summary: "STRUCT DEFINITION: A simple data bundle '{}'.",
        detail: "CONCEPT: Structs are the precursors to Classes. By default, everything inside is 'public'. Use structs for passive data objects (like a Coordinate point with x, y) that don't have complex logic or privacy needs.",
        url: doc!("/language/class"),
    },
    // ==========================================================================
    // CONTROL FLOW
    // ==========================================================================
    RuleSpec {
        pattern: r"if\s*\((.*)\)",
        summary: "CONDITIONAL: Branching logic based on '{}'.",
        detail: "CONCEPT: The gatekeeper. If the math inside () evaluates to True, we enter the gate. Note: In C++, '0' is False, and everything else is True.",
        url: doc!("/language/if"),
    },
    RuleSpec {
        pattern: r"else\s+if",
        summary: "ALTERNATE CONDITION: Checking a secondary option.",
        detail: "CONCEPT: Used when the first 'if' failed, but you still have specific criteria to check before giving up.",
        url: doc!("/language/if"),
    },
    RuleSpec {
        pattern: r"for\s*\((.*)\)",
        summary: "FOR LOOP: Repeating code a specific number of times.",
        detail: "CONCEPT: The standard loop. It has three parts: Initialization (start here), Condition (keep going while this is true), and Update (do this after every round).",
        url: doc!("/language/for"),
    },
    RuleSpec {
        pattern: r"while\s*\((.*)\)",
        summary: "WHILE LOOP: Repeating code as long as '{}' is true.",
        detail: "CONCEPT: Use this when you don't know how many times you need to loop (e.g., reading a file until the end). Caution: If the condition never becomes false, you get an Infinite Loop.",
        url: doc!("/language/while"),
    },
    RuleSpec {
        pattern: r"do\s*\{",
        summary: "DO-WHILE LOOP: Run once, then check the condition.",
        detail: "CONCEPT: Unlike a standard 'while' loop, this guarantees the code inside runs AT LEAST once before checking if it should stop.",
        url: doc!("/language/do"),
    },
    RuleSpec {
        pattern: r"switch\s*\((.*)\)",
        summary: "SWITCH STATEMENT: Jumping to a specific case for '{}'.",
        detail: "CONCEPT: A cleaner alternative to many 'else if' statements when checking a single variable against fixed values. It jumps directly to the matching 'case'.",
        url: doc!("/language/switch"),
    },
    // ==========================================================================
    // FUNCTIONS & I/O
    // ==========================================================================
    RuleSpec {
        pattern: r"cin\s*>>\s*(.*);",
        summary: "INPUT: Reading user input into '{}'.",
        detail: "CONCEPT: 'Console IN'. The '>>' arrows point to where the data is going (into the variable). It automatically detects spaces as separators.",
        url: doc!("/io/cin"),
    },
    RuleSpec {
        pattern: r"cout\s*<<\s*(.*);",
        summary: "OUTPUT: Printing '{}' to the screen.",
        detail: "CONCEPT: 'Console OUT'. The '<<' arrows point out of the program towards the screen. You can chain them: cout << name << age;",
        url: doc!("/io/cout"),
    },
    RuleSpec {
        pattern: r"void\s+(\w+)",
        summary: "VOID FUNCTION: Action function '{}' (No result returned).",
        detail: "CONCEPT: A 'void' function is a doer, not a calculator. It might print to the screen or save a file, but it doesn't give a number back to the code that called it.",
        url: doc!("/language/functions"),
    },
    RuleSpec {
        pattern: r"return\s+0;",
        summary: "SUCCESS EXIT: Signaling that the program finished correctly.",
        detail: "CONCEPT: In the main() function, returning 0 is the universal standard for 'No Errors'. The operating system reads this code.",
        url: doc!("/language/return"),
    },
    RuleSpec {
        pattern: r"return\s+1;",
        summary: "ERROR EXIT: Signaling that something went wrong.",
        detail: "CONCEPT: Non-zero return codes usually indicate an error state to the operating system or the script that ran this program.",
        url: doc!("/language/return"),
    },
    // ==========================================================================
    // OOP PILLARS
    // ==========================================================================
    RuleSpec {
        pattern: r"class\s+(\w+)",
        summary: "CLASS: Blueprint for a complex object '{}'.",
        detail: "CONCEPT: A Class bundles data (attributes) and logic (methods) together. It is the foundation of Object-Oriented Programming.",
        url: doc!("/language/class"),
    },
    RuleSpec {
        pattern: r"public:",
        summary: "ACCESS MODIFIER: Opening access to everyone.",
        detail: "CONCEPT: Public members are the 'Interface'. Anyone outside the class can see and use these functions.",
        url: doc!("/language/access_specifiers"),
    },
    RuleSpec {
        pattern: r"private:",
        summary: "ACCESS MODIFIER: Restricting access to internal logic.",
        detail: "CONCEPT: ENCAPSULATION. Private members are secrets. Only the class itself can touch them. This prevents external code from breaking the internal state of the object.",
        url: doc!("/language/access_specifiers"),
    },
    RuleSpec {
        pattern: r"class\s+(\w+)\s*:\s*public\s+(\w+)",
        summary: "INHERITANCE: '{}' is a child of '{}'.",
        detail: "CONCEPT: The child class gets all the public/protected traits of the parent. This creates an 'IS-A' relationship (e.g., Car is a Vehicle). It promotes code reusability.",
        url: doc!("/language/derived_class"),
    },
    RuleSpec {
        pattern: r"virtual\s+.*\s*=\s*0;",
        summary: "PURE VIRTUAL: Enforcing Abstraction (Interface).",
        detail: "CONCEPT: ABSTRACTION. This line says 'I don't know how to do this action yet, but any class that inherits from me MUST define it.' A class with this is an Abstract Class and cannot be instantiated directly.",
        url: doc!("/language/abstract_class"),
    },
    RuleSpec {
        pattern: r"virtual\s+",
        summary: "VIRTUAL FUNCTION: Enabling Polymorphism.",
        detail: "CONCEPT: POLYMORPHISM. 'Virtual' tells the compiler: 'Don't bind this function call yet. Wait until the program runs to see what kind of object this really is.' This allows a parent pointer to call the child's version of a function.",
        url: doc!("/language/virtual"),
    },
];
