//! Static page content: the annotated `main.tf` blocks, the screenshot gallery
//! and the key-concept glossary.
//!
//! Everything here is configuration-as-data. The tables are read-only and are
//! handed to the state machines in [`crate::ui`] at construction.

use serde::Serialize;

use crate::ui::SnippetRecord;
use crate::ui::lightbox::{Accent, GalleryTab, Screenshot};

/// Annotated Terraform blocks, in the order they appear in `main.tf`.
pub static TERRAFORM_BLOCKS: &[SnippetRecord] = &[
    SnippetRecord {
        id: "provider",
        title: "AWS Provider",
        code: r#"provider "aws" {
  region = "us-west-2"
}"#,
        explanation: "Configures the AWS provider to deploy resources in the US West (Oregon) region. \
This tells Terraform which cloud provider to use and where to create the infrastructure.",
    },
    SnippetRecord {
        id: "vpc",
        title: "VPC Resource",
        code: r#"resource "aws_vpc" "main" {
  cidr_block           = "10.0.0.0/16"
  enable_dns_support   = true
  enable_dns_hostnames = true

  tags = {
    Name = "devops-project-5"
  }
}"#,
        explanation: "Creates the Virtual Private Cloud (VPC) with a CIDR block of 10.0.0.0/16, providing \
65,536 IP addresses. DNS support and hostnames are enabled to allow instances to resolve domain names \
and be assigned DNS hostnames within the VPC.",
    },
    SnippetRecord {
        id: "subnets",
        title: "Public and Private Subnets",
        code: r#"resource "aws_subnet" "public" {
  vpc_id                  = aws_vpc.main.id
  cidr_block              = "10.0.1.0/24"
  map_public_ip_on_launch = true
  availability_zone       = "us-west-2a"

  tags = {
    Name = "devops-project-5-public-subnet"
  }
}

resource "aws_subnet" "private" {
  vpc_id            = aws_vpc.main.id
  cidr_block        = "10.0.2.0/24"
  availability_zone = "us-west-2a"

  tags = {
    Name = "devops-project-5-private-subnet"
  }
}"#,
        explanation: "Creates two subnets in the same Availability Zone (us-west-2a). The Public subnet \
(10.0.1.0/24) automatically assigns public IPs to instances launched in it. The Private subnet \
(10.0.2.0/24) does not assign public IPs, keeping instances isolated from direct internet access.",
    },
    SnippetRecord {
        id: "igw",
        title: "Internet Gateway",
        code: r#"resource "aws_internet_gateway" "igw" {
  vpc_id = aws_vpc.main.id

  tags = {
    Name = "devops-project-5-igw"
  }
}"#,
        explanation: "Attaches an Internet Gateway to the VPC. This allows resources in public subnets to \
communicate with the internet, enabling both inbound and outbound internet traffic for publicly \
accessible instances.",
    },
    SnippetRecord {
        id: "nat",
        title: "NAT Gateway & Elastic IP",
        code: r#"resource "aws_eip" "nat_ip" {
  domain = "vpc"
}

resource "aws_nat_gateway" "nat" {
  allocation_id = aws_eip.nat_ip.id
  subnet_id     = aws_subnet.public.id

  tags = {
    Name = "devops-project-5-nat"
  }
}"#,
        explanation: "Creates an Elastic IP and a NAT Gateway in the public subnet. This allows instances \
in the private subnet to initiate outbound connections to the internet (e.g., for software updates) \
while preventing unsolicited inbound connections.",
    },
    SnippetRecord {
        id: "route_tables",
        title: "Route Tables",
        code: r#"resource "aws_route_table" "public" {
  vpc_id = aws_vpc.main.id

  route {
    cidr_block = "0.0.0.0/0"
    gateway_id = aws_internet_gateway.igw.id
  }

  tags = {
    Name = "devops-project-5-public-rt"
  }
}

resource "aws_route_table" "private" {
  vpc_id = aws_vpc.main.id

  route {
    cidr_block     = "0.0.0.0/0"
    nat_gateway_id = aws_nat_gateway.nat.id
  }

  tags = {
    Name = "devops-project-5-private-rt"
  }
}"#,
        explanation: "Configures routing tables for both subnets. The public route table directs all \
internet-bound traffic (0.0.0.0/0) to the Internet Gateway. The private route table routes \
internet-bound traffic through the NAT Gateway, enabling outbound access only.",
    },
    SnippetRecord {
        id: "route_associations",
        title: "Route Table Associations",
        code: r#"resource "aws_route_table_association" "public_assoc" {
  subnet_id      = aws_subnet.public.id
  route_table_id = aws_route_table.public.id
}

resource "aws_route_table_association" "private_assoc" {
  subnet_id      = aws_subnet.private.id
  route_table_id = aws_route_table.private.id
}"#,
        explanation: "Associates the route tables with their respective subnets. Traffic from the public \
subnet uses the public route table (via Internet Gateway) and traffic from the private subnet uses \
the private route table (via NAT Gateway).",
    },
    SnippetRecord {
        id: "frontend_sg",
        title: "Frontend Security Group",
        code: r#"resource "aws_security_group" "frontend_sg" {
  name   = "frontend-sg"
  vpc_id = aws_vpc.main.id

  ingress {
    description = "Allow HTTP"
    from_port   = 80
    to_port     = 80
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  ingress {
    description = "Allow HTTPS"
    from_port   = 443
    to_port     = 443
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  ingress {
    description = "Allow web app"
    from_port   = 3000
    to_port     = 3000
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  ingress {
    description = "Allow SSH"
    from_port   = 22
    to_port     = 22
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }

  tags = {
    Name = "frontend-sg"
  }
}"#,
        explanation: "Defines firewall rules for the frontend instance. Allows inbound HTTP (80), HTTPS \
(443), the web app (3000) and SSH (22) from anywhere on the internet, and all outbound traffic. \
The frontend is public while the set of open ports stays explicit.",
    },
    SnippetRecord {
        id: "backend_sg",
        title: "Backend Security Group",
        code: r#"resource "aws_security_group" "backend_sg" {
  name   = "backend-sg"
  vpc_id = aws_vpc.main.id

  ingress {
    description     = "Allow backend requests from frontend SG"
    from_port       = 8000
    to_port         = 8000
    protocol        = "tcp"
    security_groups = [aws_security_group.frontend_sg.id]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }

  tags = {
    Name = "backend-sg"
  }
}"#,
        explanation: "Defines strict firewall rules for the backend instance. It ONLY accepts traffic on \
port 8000 from instances in the frontend security group. The backend is unreachable from the \
internet and can only be called by the frontend.",
    },
    SnippetRecord {
        id: "backend_instance",
        title: "Backend EC2 Instance",
        code: r#"resource "aws_instance" "backend" {
  ami                    = "ami-0892d3c7ee96c0bf7"
  instance_type          = "t2.micro"
  subnet_id              = aws_subnet.private.id
  private_ip             = "10.0.2.20"
  vpc_security_group_ids = [aws_security_group.backend_sg.id]

  user_data = file("user_data_backend.sh")

  tags = {
    Name = "backend-server"
  }
}"#,
        explanation: "Launches the backend EC2 instance in the private subnet with a static private IP \
(10.0.2.20). It has no public IP address. The user_data script installs the backend API and starts \
it on boot; it is only reachable from the frontend instance on port 8000.",
    },
    SnippetRecord {
        id: "frontend_instance",
        title: "Frontend EC2 Instance",
        code: r#"resource "aws_instance" "frontend" {
  depends_on = [
    aws_instance.backend
  ]

  ami                    = "ami-0892d3c7ee96c0bf7"
  instance_type          = "t2.small"
  subnet_id              = aws_subnet.public.id
  vpc_security_group_ids = [aws_security_group.frontend_sg.id]

  user_data = file("user_data_frontend.sh")

  tags = {
    Name = "frontend-server"
  }
}"#,
        explanation: "Launches the frontend EC2 instance in the public subnet. It explicitly depends on \
the backend instance so the backend is ready before the frontend starts. The user_data script \
installs and starts the web application on boot.",
    },
];

/// Screenshot gallery, one tab per stage of the walkthrough.
pub static SCREENSHOT_TABS: &[GalleryTab] = &[
    GalleryTab {
        id: "terraform",
        label: "Terraform",
        accent: Accent::Purple,
        shots: &[
            Screenshot {
                title: "1. Terraform Init",
                description: "Initializing the Terraform working directory and downloading providers.",
                src: "/static/screenshots/terraform-init.svg",
            },
            Screenshot {
                title: "2. Terraform Plan",
                description: "Previewing the changes that Terraform will make to the infrastructure.",
                src: "/static/screenshots/terraform-plan.svg",
            },
            Screenshot {
                title: "3. Terraform Apply",
                description: "Applying the configuration to create resources in AWS.",
                src: "/static/screenshots/terraform-apply.svg",
            },
        ],
    },
    GalleryTab {
        id: "aws",
        label: "AWS Console",
        accent: Accent::Blue,
        shots: &[
            Screenshot {
                title: "VPC Dashboard",
                description: "The created VPC with its ID and state.",
                src: "/static/screenshots/aws-vpc.svg",
            },
            Screenshot {
                title: "EC2 Instances",
                description: "Frontend (Public) and Backend (Private) instances running.",
                src: "/static/screenshots/aws-ec2-instances.svg",
            },
            Screenshot {
                title: "Security Groups",
                description: "Configured security groups for Frontend and Backend access control.",
                src: "/static/screenshots/aws-security-groups.svg",
            },
            Screenshot {
                title: "NAT Gateway",
                description: "NAT Gateway allowing private instances to access the internet.",
                src: "/static/screenshots/aws-nat-gateways.svg",
            },
        ],
    },
    GalleryTab {
        id: "verify",
        label: "Verification",
        accent: Accent::Green,
        shots: &[
            Screenshot {
                title: "Frontend Instance Summary",
                description: "The Public IPv4 address of the Frontend instance used to reach the application.",
                src: "/static/screenshots/aws-ec2-frontend.svg",
            },
            Screenshot {
                title: "Frontend Access & Backend Connectivity",
                description: "Accessing the Frontend via its Public IP and successfully pinging the Private Backend.",
                src: "/static/screenshots/backend-ping-success.svg",
            },
        ],
    },
];

/// Glossary entry shown in the "Key Concepts" section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeyConcept {
    pub term: &'static str,
    pub desc: &'static str,
    pub link: &'static str,
}

pub static KEY_CONCEPTS: &[KeyConcept] = &[
    KeyConcept {
        term: "VPC (Virtual Private Cloud)",
        desc: "A logically isolated section of the AWS Cloud where you can launch AWS resources in a virtual network that you define.",
        link: "https://docs.aws.amazon.com/vpc/latest/userguide/what-is-amazon-vpc.html",
    },
    KeyConcept {
        term: "CIDR Block",
        desc: "Classless Inter-Domain Routing. A method for allocating IP addresses and for IP routing.",
        link: "https://docs.aws.amazon.com/vpc/latest/userguide/vpc-cidr-blocks.html",
    },
    KeyConcept {
        term: "Subnet",
        desc: "A range of IP addresses in your VPC. You can launch AWS resources into a specified subnet.",
        link: "https://docs.aws.amazon.com/vpc/latest/userguide/configure-subnets.html",
    },
    KeyConcept {
        term: "Internet Gateway",
        desc: "A horizontally scaled, redundant, and highly available VPC component that allows communication between your VPC and the internet.",
        link: "https://docs.aws.amazon.com/vpc/latest/userguide/VPC_Internet_Gateway.html",
    },
    KeyConcept {
        term: "NAT Gateway",
        desc: "A Network Address Translation service. Instances in a private subnet can connect to services outside your VPC, but external services cannot initiate a connection with those instances.",
        link: "https://docs.aws.amazon.com/vpc/latest/userguide/vpc-nat-gateway.html",
    },
    KeyConcept {
        term: "Security Group",
        desc: "Acts as a virtual firewall for your EC2 instances to control incoming and outgoing traffic.",
        link: "https://docs.aws.amazon.com/vpc/latest/userguide/VPC_SecurityGroups.html",
    },
];
